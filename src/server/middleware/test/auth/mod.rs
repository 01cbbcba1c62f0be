use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    extension::token::TokenService,
    middleware::auth::{bearer_token, AuthGuard, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", Duration::from_secs(60)).unwrap()
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
