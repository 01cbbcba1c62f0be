use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    extension::token::TokenService,
    model::user::User,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller of a request from its bearer token.
///
/// The token proves identity; admin status is read from the stored user so that a
/// revoked admin loses access before their token expires.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold; empty for any authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Token is invalid, expired or names an unknown user
    /// - `Err(AuthError::Forbidden)` - Caller lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(&claims.sub).await? else {
            return Err(AuthError::InvalidToken(format!("user {} no longer exists", claims.sub)).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::Forbidden(
                            "Administrator privileges required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
