use sentry::{types::Dsn, ClientInitGuard, ClientOptions};

use crate::server::{config::ErrorReportingSettings, error::startup::ObservabilityError};

/// Initializes Sentry when a DSN is configured.
///
/// # Arguments
/// - `settings` - DSN, environment name and trace sample rate
///
/// # Returns
/// - `Ok(None)` - No DSN configured; error reporting stays off
/// - `Ok(Some(ClientInitGuard))` - Client installed; keep the guard alive to flush on exit
/// - `Err(ObservabilityError::InvalidDsn)` - The DSN does not parse
pub fn init(settings: &ErrorReportingSettings) -> Result<Option<ClientInitGuard>, ObservabilityError> {
    let Some(raw) = settings.dsn.as_deref() else {
        return Ok(None);
    };

    let dsn = raw
        .parse::<Dsn>()
        .map_err(|e| ObservabilityError::InvalidDsn(e.to_string()))?;

    let guard = sentry::init(ClientOptions {
        dsn: Some(dsn),
        environment: Some(settings.environment.clone().into()),
        traces_sample_rate: settings.traces_sample_rate,
        release: sentry::release_name!(),
        ..Default::default()
    });

    tracing::info!(
        "Error reporting enabled for environment {}",
        settings.environment
    );

    Ok(Some(guard))
}
