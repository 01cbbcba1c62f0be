//! Response security headers and cross-origin policy.

use axum::{
    http::{
        header::{
            ACCEPT, AUTHORIZATION, CONTENT_SECURITY_POLICY, CONTENT_TYPE, REFERRER_POLICY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
        HeaderName, HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowCredentials, AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::server::config::FrontendOrigin;

/// Headers added to every response that does not already carry them.
pub const SECURITY_HEADERS: [(HeaderName, &str); 5] = [
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
    (X_XSS_PROTECTION, "1; mode=block"),
    (REFERRER_POLICY, "no-referrer-when-downgrade"),
    (CONTENT_SECURITY_POLICY, "default-src 'self'"),
];

/// Wraps every route of `router`, including its fallback, with the security headers.
///
/// Values set by a handler are kept.
pub fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
}

/// Builds the CORS policy for the API routes.
///
/// Credentials are allowed, so a wildcard origin is expressed by mirroring the request
/// origin; the configuration layer only permits that outside production. Requests from
/// any other origin get neither `Access-Control-Allow-Origin` nor
/// `Access-Control-Allow-Credentials`.
///
/// # Arguments
/// - `origin` - Frontend origin from the resolved profile
pub fn cors_layer(origin: &FrontendOrigin) -> CorsLayer {
    let (allow_origin, allow_credentials) = match origin {
        FrontendOrigin::Exact(value) => {
            let allowed = value.clone();
            (
                AllowOrigin::list([value.clone()]),
                AllowCredentials::predicate(move |origin, _| *origin == allowed),
            )
        }
        FrontendOrigin::Any => (AllowOrigin::mirror_request(), AllowCredentials::yes()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(allow_credentials)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
}
