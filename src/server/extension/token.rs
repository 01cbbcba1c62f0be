use std::{sync::Arc, time::Duration};

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, startup::ExtensionInitError, AppError};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued to.
    pub sub: String,
    pub is_admin: bool,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time as seconds since the Unix epoch.
    pub iat: i64,
}

/// Issues and verifies HS256 signed access tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<(EncodingKey, DecodingKey)>,
    validation: Arc<Validation>,
    expiry: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `expiry` - Lifetime of issued tokens
    ///
    /// # Returns
    /// - `Ok(TokenService)` - Ready to issue tokens
    /// - `Err(ExtensionInitError::Token)` - Secret is empty
    pub fn new(secret: &str, expiry: Duration) -> Result<Self, ExtensionInitError> {
        if secret.is_empty() {
            return Err(ExtensionInitError::Token(
                "signing secret is empty".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            keys: Arc::new((
                EncodingKey::from_secret(secret.as_bytes()),
                DecodingKey::from_secret(secret.as_bytes()),
            )),
            validation: Arc::new(validation),
            expiry,
        })
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Issues a token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalError)` - Encoding failed
    pub fn issue(&self, user_id: &str, is_admin: bool) -> Result<String, AppError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            is_admin,
            exp: iat + self.expiry.as_secs() as i64,
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.0)
            .map_err(|e| AppError::InternalError(format!("Failed to encode token: {}", e)))
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Signature, expiry or claims are invalid
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.1, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
