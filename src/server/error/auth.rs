use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry or claim validation.
    ///
    /// # Fields
    /// - Reason reported by the token decoder, logged at debug level only
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Email and password did not match a stored user.
    ///
    /// Deliberately does not distinguish an unknown email from a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks permission for the requested operation.
    ///
    /// # Fields
    /// - Description of the denied action, returned to the client
    #[error("{0}")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with a generic message
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `Forbidden` → 403 Forbidden with the provided message
///
/// Token decoding failures are logged at debug level; the client never sees the
/// decoder's reason.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing authorization token".to_string(),
            ),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected bearer token: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token".to_string(),
                )
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
