//! Route composition and the OpenAPI documentation surface.
//!
//! API namespaces are mounted under `/api/v1` behind rate limiting and CORS. The health
//! probe, the Swagger UI and the OpenAPI document sit outside that scope. Every
//! response, including 404s and 429s, carries the security headers.

use axum::{
    extract::Request,
    http::Uri,
    middleware::from_fn_with_state,
    response::IntoResponse,
    Router,
};
use tower::util::MapRequest;
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        amenity::{self, AMENITY_TAG},
        auth::{self, AUTH_TAG},
        booking::{self, BOOKING_TAG},
        health::{self, HEALTH_TAG},
        payment::{self, PAYMENT_TAG},
        place::{self, PLACE_TAG},
        review::{self, REVIEW_TAG},
        user::{self, USER_TAG},
    },
    error::AppError,
    middleware::{
        rate_limit::{rate_limit, ClientThrottle},
        security::{cors_layer, with_security_headers},
    },
    state::AppState,
};

/// Name of the bearer token scheme in the OpenAPI document.
pub const BEARER_SCHEME: &str = "Bearer Auth";

pub const DOCS_PATH: &str = "/doc";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

const API_DESCRIPTION: &str = "HBnB - Luxury Property Rental Platform API\n\n\
Complete REST API for property listings, bookings, reviews, and payments.\n\n\
**Authentication:** Most endpoints require JWT authentication. Use /api/v1/auth/login \
to get your access token, then click \"Authorize\" button above.";

const BEARER_DESCRIPTION: &str = "Type in the *'Value'* input box below: \
**'Bearer &lt;JWT&gt;'**, where JWT is the token from /api/v1/auth/login";

#[derive(OpenApi)]
#[openapi(
    info(title = "HBnB API", version = "1.0"),
    modifiers(&BearerAuthAddon),
    security(("Bearer Auth" = [])),
    tags(
        (name = USER_TAG, description = "User registration and profiles"),
        (name = REVIEW_TAG, description = "Place reviews"),
        (name = PLACE_TAG, description = "Property listings"),
        (name = AMENITY_TAG, description = "Amenities offered by places"),
        (name = AUTH_TAG, description = "Authentication"),
        (name = BOOKING_TAG, description = "Bookings"),
        (name = PAYMENT_TAG, description = "Payments"),
        (name = HEALTH_TAG, description = "Health probe")
    )
)]
pub struct ApiDoc;

/// Adds the API description and the `Authorization` header key scheme.
pub struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.description = Some(API_DESCRIPTION.to_string());

        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                BEARER_SCHEME,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    BEARER_DESCRIPTION,
                ))),
            );
    }
}

/// Composes every route of the application.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Routes with rate limiting and CORS on `/api`, security headers and
///   request tracing everywhere
pub fn router(state: AppState) -> Router {
    let api = OpenApiRouter::new()
        .nest("/api/v1/users", user::router())
        .nest("/api/v1/reviews", review::router())
        .nest("/api/v1/places", place::router())
        .nest("/api/v1/amenities", amenity::router())
        .nest("/api/v1/auth", auth::router())
        .nest("/api/v1/bookings", booking::router())
        .nest("/api/v1/payments", payment::router())
        .layer(from_fn_with_state(
            ClientThrottle {
                limiter: state.limiter.clone(),
                trust_proxy: state.config.rate_limit.trust_proxy,
            },
            rate_limit,
        ))
        .layer(cors_layer(&state.config.frontend_origin));

    let (routes, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(health::router())
        .merge(api)
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi))
        .fallback(not_found)
        .with_state(state);

    with_security_headers(routes).layer(TraceLayer::new_for_http())
}

/// The composed router behind API path normalization.
pub type AppService = MapRequest<Router, fn(Request) -> Request>;

/// Wraps the composed router so `/api/v1/places/` and `/api/v1/places` are the same
/// route.
///
/// Path normalization must run before routing, so it wraps the router as a service
/// instead of being added with `Router::layer`.
pub fn app(state: AppState) -> AppService {
    MapRequest::new(router(state), trim_api_trailing_slash as fn(Request) -> Request)
}

/// Drops trailing slashes from `/api/` paths.
///
/// Limited to the API because the Swagger UI redirects `/doc` to `/doc/`, which a
/// global trim would turn into a redirect loop.
fn trim_api_trailing_slash(mut request: Request) -> Request {
    let path = request.uri().path();
    if !path.starts_with("/api/") || !path.ends_with('/') {
        return request;
    }

    let mut target = path.trim_end_matches('/').to_string();
    if let Some(query) = request.uri().query() {
        target.push('?');
        target.push_str(query);
    }
    if let Ok(uri) = target.parse::<Uri>() {
        *request.uri_mut() = uri;
    }

    request
}

async fn not_found() -> impl IntoResponse {
    AppError::NotFound("Resource not found".to_string())
}
