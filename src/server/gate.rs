//! Production trust gate.
//!
//! Refuses to let a production deployment start with missing secrets or no
//! database, before any connection is attempted.

use crate::server::{
    config::{ConfigProfile, Profile},
    error::startup::ProductionValidationError,
};

/// Checks mandatory production settings.
///
/// Only the production profile is checked; development and testing always pass.
/// Every empty key is collected, in the order `SECRET_KEY`, `JWT_SECRET_KEY`,
/// `SQLALCHEMY_DATABASE_URI`, so a single error lists all of them.
///
/// # Arguments
/// - `config` - Resolved configuration profile
///
/// # Returns
/// - `Ok(())` - Not production, or all mandatory settings are present
/// - `Err(ProductionValidationError)` - One or more mandatory settings are empty
pub fn validate(config: &ConfigProfile) -> Result<(), ProductionValidationError> {
    match config.profile {
        Profile::Development | Profile::Testing => Ok(()),
        Profile::Production => {
            let required = [
                ("SECRET_KEY", config.secret_key.as_str()),
                ("JWT_SECRET_KEY", config.jwt_secret_key.as_str()),
                ("SQLALCHEMY_DATABASE_URI", config.database.url.as_str()),
            ];

            let missing: Vec<&'static str> = required
                .into_iter()
                .filter(|(_, value)| value.trim().is_empty())
                .map(|(key, _)| key)
                .collect();

            if missing.is_empty() {
                Ok(())
            } else {
                Err(ProductionValidationError { missing })
            }
        }
    }
}
