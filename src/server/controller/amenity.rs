use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        amenity::{AmenityDto, CreateAmenityDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::amenity::AmenityService,
        state::AppState,
    },
};

/// Tag for grouping amenity endpoints in OpenAPI documentation
pub static AMENITY_TAG: &str = "amenities";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_amenity, get_amenities))
        .routes(routes!(get_amenity))
}

#[utoipa::path(
    post,
    path = "/",
    tag = AMENITY_TAG,
    request_body = CreateAmenityDto,
    responses(
        (status = 201, description = "Successfully created amenity", body = AmenityDto),
        (status = 400, description = "Invalid amenity data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Amenity already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAmenityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let amenity = AmenityService::new(&state.db).create(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(amenity.into_dto())))
}

#[utoipa::path(
    get,
    path = "/",
    tag = AMENITY_TAG,
    security(()),
    responses(
        (status = 200, description = "Successfully retrieved amenities", body = Vec<AmenityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db).get_all().await?;
    let amenities_dto: Vec<_> = amenities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(amenities_dto)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = AMENITY_TAG,
    security(()),
    params(
        ("id" = String, Path, description = "Amenity ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved amenity", body = AmenityDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = AmenityService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}
