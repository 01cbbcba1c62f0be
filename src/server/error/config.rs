use thiserror::Error;

/// Errors raised while resolving a `ConfigProfile` from the environment.
///
/// Every variant is fatal at startup; the process reports the message and exits
/// non-zero before any extension is initialized.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `APP_ENV` names a profile that does not exist.
    ///
    /// Accepted selectors are `development`, `production` and `testing` (or the short
    /// forms `dev`, `prod` and `test`), compared case-insensitively.
    #[error("Unknown configuration profile '{0}', expected development, production or testing")]
    UnknownProfile(String),

    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Name of the offending environment variable
        key: &'static str,
        /// The raw value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// `FRONTEND_URL=*` was supplied to the production profile.
    ///
    /// Credentialed CORS with a wildcard origin would let any site issue authenticated
    /// requests, so production requires an exact origin.
    #[error("FRONTEND_URL must be an exact origin in production, '*' is not allowed")]
    WildcardOriginInProduction,
}
