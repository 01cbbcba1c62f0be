use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}

/// POST /api/v1/auth/login - Exchange credentials for an access token
///
/// # Returns
/// - `200 OK`: `TokenDto` with a bearer token for the `Authorization` header and its
///   lifetime in seconds
/// - `401 Unauthorized`: Email unknown or password wrong
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    security(()),
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state.db, &state.tokens, &state.passwords)
        .login(&payload.email, payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            expires_in: state.tokens.expiry().as_secs(),
        }),
    ))
}
