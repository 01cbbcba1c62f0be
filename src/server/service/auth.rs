//! Authentication service issuing bearer tokens.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    extension::{password::PasswordHasher, token::TokenService},
    service::user::normalize_email,
};

/// Service exchanging credentials for signed access tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    passwords: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token issuer configured with the profile's secret and expiry
    /// - `passwords` - Hasher used to verify stored password hashes
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        passwords: &'a PasswordHasher,
    ) -> Self {
        Self {
            db,
            tokens,
            passwords,
        }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// An unknown email and a wrong password produce the same error so the response
    /// does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Email as entered by the user
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token carrying the user ID and admin flag
    /// - `Err(AuthError::InvalidCredentials)` - Email unknown or password wrong
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: String) -> Result<String, AppError> {
        let Ok(email) = normalize_email(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.passwords.verify(password, user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("Issued access token for user {}", user.id);

        self.tokens.issue(&user.id, user.is_admin)
    }
}
