//! Shared extension handles and their one-time initialization.
//!
//! The process owns a single [`ExtensionRegistry`]. Initializing it against a resolved
//! profile builds every handle in a fixed order (persistence, token, password hashing,
//! rate limiter, migration binding). Each handle lives in its own `OnceCell`, so a
//! second `initialize` hands back the existing handles without reconnecting or
//! re-running migrations.

pub mod migration;
pub mod password;
pub mod persistence;
pub mod rate_limit;
pub mod token;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::server::{
    config::ConfigProfile,
    error::startup::ExtensionInitError,
    extension::{
        migration::MigrationBinding, password::PasswordHasher, rate_limit::RateLimiter,
        token::TokenService,
    },
};

/// Handles produced by a successful initialization.
///
/// Every field is cheap to clone; clones share the underlying pool, keys and counters.
#[derive(Clone)]
pub struct Extensions {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
    pub limiter: RateLimiter,
    pub migrations: MigrationBinding,
}

#[derive(Default)]
pub struct ExtensionRegistry {
    db: OnceCell<DatabaseConnection>,
    tokens: OnceCell<TokenService>,
    passwords: OnceCell<PasswordHasher>,
    limiter: OnceCell<RateLimiter>,
    migrations: OnceCell<MigrationBinding>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes every extension against `config`, in dependency order.
    ///
    /// Steps that already succeeded are not repeated. If a step fails the handles built
    /// before it are kept, later ones are never attempted, and the error is returned.
    ///
    /// # Arguments
    /// - `config` - Resolved configuration profile
    ///
    /// # Returns
    /// - `Ok(Extensions)` - All handles ready for use
    /// - `Err(ExtensionInitError)` - The first extension that failed to initialize
    pub async fn initialize(&self, config: &ConfigProfile) -> Result<Extensions, ExtensionInitError> {
        let db = self
            .db
            .get_or_try_init(|| persistence::connect(&config.database))
            .await?;

        let tokens = self
            .tokens
            .get_or_try_init(|| async {
                TokenService::new(&config.jwt_secret_key, config.token_expiry)
            })
            .await?;

        let passwords = self
            .passwords
            .get_or_try_init(|| async { PasswordHasher::new(config.password_hash_cost) })
            .await?;

        let limiter = self
            .limiter
            .get_or_try_init(|| async {
                let limiter = RateLimiter::connect(&config.rate_limit).await?;
                tracing::info!(
                    "Rate limiting {} on {} storage",
                    limiter.quota(),
                    limiter.backend()
                );
                Ok::<_, ExtensionInitError>(limiter)
            })
            .await?;

        let migrations = self
            .migrations
            .get_or_try_init(|| migration::bind(db, config.database.auto_migrate))
            .await?;

        Ok(Extensions {
            db: db.clone(),
            tokens: tokens.clone(),
            passwords: *passwords,
            limiter: limiter.clone(),
            migrations: *migrations,
        })
    }

    /// Names of the extensions initialized so far, in initialization order.
    pub fn initialized(&self) -> Vec<&'static str> {
        [
            ("persistence", self.db.initialized()),
            ("token", self.tokens.initialized()),
            ("password_hashing", self.passwords.initialized()),
            ("rate_limiter", self.limiter.initialized()),
            ("migration", self.migrations.initialized()),
        ]
        .into_iter()
        .filter(|(_, ready)| *ready)
        .map(|(name, _)| name)
        .collect()
    }
}
