//! Fatal errors raised while bootstrapping the application.
//!
//! None of these reach an HTTP client: any of them aborts startup with a
//! descriptive message and a non-zero exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Mandatory production settings that were empty or absent.
///
/// Lists every missing key at once, in the order they are checked, so an operator
/// can fix the deployment in a single pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required production settings: {}", .missing.join(", "))]
pub struct ProductionValidationError {
    pub missing: Vec<&'static str>,
}

/// Failure to construct one of the shared extension handles.
#[derive(Error, Debug)]
pub enum ExtensionInitError {
    /// The relational store could not be reached or the pool could not be built.
    #[error("Failed to initialize persistence: {0}")]
    Persistence(#[source] sea_orm::DbErr),

    /// Pending migrations could not be listed or applied.
    #[error("Failed to bind migrations: {0}")]
    Migration(#[source] sea_orm::DbErr),

    /// The token signing secret is unusable.
    #[error("Failed to initialize token service: {0}")]
    Token(String),

    /// Bcrypt cost outside the range the algorithm accepts.
    #[error("Failed to initialize password hashing: cost {0} is outside 4..=31")]
    PasswordHashing(u32),

    /// Rate limiter storage URI uses a scheme with no backing implementation.
    #[error("Failed to initialize rate limiter: unsupported storage URI '{0}'")]
    RateLimitStorage(String),

    /// The external rate limit store rejected the connection.
    #[error("Failed to initialize rate limiter: {0}")]
    RateLimitStore(#[source] redis::RedisError),
}

/// Failure to install logging or error reporting.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {}: {source}", .path.display())]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened or rotated.
    #[error("Failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The global subscriber holding the file layer slot has been dropped.
    #[error("Failed to attach file logging: {0}")]
    Subscriber(#[from] tracing_subscriber::reload::Error),

    /// `SENTRY_DSN` is set but does not parse as a DSN.
    #[error("Invalid SENTRY_DSN: {0}")]
    InvalidDsn(String),
}

/// Top-level startup error aggregating every bootstrap stage.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ProductionValidation(#[from] ProductionValidationError),

    #[error(transparent)]
    Extension(#[from] ExtensionInitError),

    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    /// Binding or serving the HTTP listener failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
