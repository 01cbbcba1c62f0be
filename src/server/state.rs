//! Application state shared across all request handlers.
//!
//! `AppState` is assembled once from the initialized extensions and the resolved
//! profile, then cloned into every handler through Axum's state extraction. Every field
//! is reference counted or a pool handle, so clones share the same resources.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::ConfigProfile,
    extension::{
        password::PasswordHasher, rate_limit::RateLimiter, token::TokenService, Extensions,
    },
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Hashes and verifies user passwords on the blocking pool.
    pub passwords: PasswordHasher,

    /// Per-client request quota shared by all API routes.
    pub limiter: RateLimiter,

    /// Resolved configuration of the running profile.
    pub config: Arc<ConfigProfile>,
}

impl AppState {
    /// Creates the application state from initialized extensions.
    ///
    /// # Arguments
    /// - `extensions` - Handles produced by the extension registry
    /// - `config` - Resolved configuration profile
    ///
    /// # Returns
    /// - `AppState` - State ready to be given to the router
    pub fn new(extensions: Extensions, config: Arc<ConfigProfile>) -> Self {
        Self {
            db: extensions.db,
            tokens: extensions.tokens,
            passwords: extensions.passwords,
            limiter: extensions.limiter,
            config,
        }
    }
}
