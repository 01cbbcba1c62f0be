//! Application bootstrap and serving.
//!
//! `bootstrap` runs the startup sequence to completion before anything listens:
//! profile resolution, the production gate, extension initialization, then
//! observability. Any failure aborts with a `BootstrapError`; no partially configured
//! application is ever returned.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

use crate::server::{
    config::{env::Env, ConfigProfile, Profile},
    error::startup::BootstrapError,
    extension::{migration::MigrationBinding, ExtensionRegistry},
    gate,
    observability::{self, logging::LogInstaller, Observability},
    router::{self, AppService},
    state::AppState,
};

/// Interval between sweeps of idle in-memory rate limit keys.
const LIMITER_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// A fully initialized application, ready to serve.
pub struct Application {
    pub config: Arc<ConfigProfile>,
    pub state: AppState,
    pub migrations: MigrationBinding,
    /// Held for the lifetime of the server; dropping it flushes error reports.
    pub observability: Observability,
}

/// Builds the application for `profile`.
///
/// # Arguments
/// - `profile` - Deployment profile selected by `APP_ENV`
/// - `env` - Captured environment variables
/// - `registry` - Extension registry owned by the process
/// - `logs` - Installer for the rotating file log layer
///
/// # Returns
/// - `Ok(Application)` - Every stage succeeded
/// - `Err(BootstrapError)` - The first stage that failed
pub async fn bootstrap(
    profile: Profile,
    env: &Env,
    registry: &ExtensionRegistry,
    logs: &LogInstaller,
) -> Result<Application, BootstrapError> {
    let config = ConfigProfile::resolve(profile, env)?;
    tracing::info!("Starting with {} profile: {:?}", profile, config);

    gate::validate(&config)?;

    let extensions = registry.initialize(&config).await?;
    let observability = observability::install(&config, logs)?;

    if let Some(policy) = &config.cookie_policy {
        tracing::info!(
            "Session cookies: secure={} http_only={} same_site={}",
            policy.secure,
            policy.http_only,
            policy.same_site
        );
    }

    let config = Arc::new(config);
    let migrations = extensions.migrations;
    let state = AppState::new(extensions, config.clone());

    Ok(Application {
        config,
        state,
        migrations,
        observability,
    })
}

impl Application {
    /// The composed HTTP service, with API trailing slashes normalized.
    pub fn service(&self) -> AppService {
        router::app(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    ///
    /// # Returns
    /// - `Ok(())` - Server shut down gracefully
    /// - `Err(BootstrapError::Io)` - Binding or serving failed
    pub async fn run(self) -> Result<(), BootstrapError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let limiter = self.state.limiter.clone();
        let sweeper = tokio::spawn(async move {
            let mut interval = tokio::time::interval(LIMITER_SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                limiter.sweep();
            }
        });

        let service = self.service();
        let result = axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(service),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await;

        sweeper.abort();
        tracing::info!("Server stopped");

        result.map_err(BootstrapError::from)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
