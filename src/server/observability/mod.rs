//! Logging and error reporting installed after extensions are initialized.

pub mod error_reporting;
pub mod logging;
pub mod rotating;

use sentry::ClientInitGuard;

use crate::server::{
    config::ConfigProfile,
    error::startup::ObservabilityError,
    observability::logging::{FileLogging, LogInstaller},
};

/// Observability state that must outlive the server.
///
/// Dropping the Sentry guard flushes queued events, so the value is held until the
/// listener shuts down.
pub struct Observability {
    pub file_logging: FileLogging,
    pub error_reporting: Option<ClientInitGuard>,
}

/// Attaches file logging and starts error reporting for the given profile.
///
/// # Arguments
/// - `config` - Resolved configuration profile
/// - `logs` - Installer holding the global subscriber's file layer slot
///
/// # Returns
/// - `Ok(Observability)` - Guards to keep alive for the process lifetime
/// - `Err(ObservabilityError)` - Log file or error reporting setup failed
pub fn install(
    config: &ConfigProfile,
    logs: &LogInstaller,
) -> Result<Observability, ObservabilityError> {
    let file_logging = logs.install(config)?;
    let error_reporting = error_reporting::init(&config.error_reporting)?;

    Ok(Observability {
        file_logging,
        error_reporting,
    })
}
