use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::extension::rate_limit::{Decision, RateLimiter},
};

const ANONYMOUS_CLIENT: &str = "anonymous";

/// Middleware state: the shared limiter and how clients are identified.
#[derive(Clone)]
pub struct ClientThrottle {
    pub limiter: RateLimiter,
    /// Honour `X-Forwarded-For`/`X-Real-IP` instead of the peer address.
    pub trust_proxy: bool,
}

/// Charges each API request to its client's quota.
///
/// Throttled requests are answered with 429 and a `Retry-After` header in whole
/// seconds, never less than one.
pub async fn rate_limit(
    State(throttle): State<ClientThrottle>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request, throttle.trust_proxy);

    match throttle.limiter.check(&key).await {
        Decision::Allowed => next.run(request).await,
        Decision::Throttled { retry_after } => {
            tracing::debug!("Rate limit exceeded for {}", key);

            let seconds = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorDto {
                    error: "Too many requests".to_string(),
                }),
            )
                .into_response();
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(seconds.max(1)));
            response
        }
    }
}

/// Identifies the client a request is charged to.
///
/// Keys on the peer address. Behind a trusted proxy the first `X-Forwarded-For` hop,
/// then `X-Real-IP`, take precedence; otherwise those headers are client-controlled
/// and ignored.
///
/// # Arguments
/// - `request` - Incoming request
/// - `trust_proxy` - Whether forwarding headers identify the client
pub fn client_key(request: &Request, trust_proxy: bool) -> String {
    trust_proxy
        .then(|| forwarded_client(request.headers()))
        .flatten()
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| ANONYMOUS_CLIENT.to_string())
}

fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    header("x-forwarded-for").or_else(|| header("x-real-ip"))
}
