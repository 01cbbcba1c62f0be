use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        place::{CreatePlaceDto, PlaceDto, UpdatePlaceDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::place::{CreatePlaceParam, UpdatePlaceParam},
        service::place::PlaceService,
        state::AppState,
    },
};

/// Tag for grouping place endpoints in OpenAPI documentation
pub static PLACE_TAG: &str = "places";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_place, get_places))
        .routes(routes!(get_place, update_place))
}

/// POST /api/v1/places - Create a listing owned by the caller
///
/// # Authentication
/// Requires a valid bearer token
#[utoipa::path(
    post,
    path = "/",
    tag = PLACE_TAG,
    request_body = CreatePlaceDto,
    responses(
        (status = 201, description = "Successfully created place", body = PlaceDto),
        (status = 400, description = "Invalid place data or unknown amenity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let place = PlaceService::new(&state.db)
        .create(CreatePlaceParam::from_dto(payload, owner.id))
        .await?;

    Ok((StatusCode::CREATED, Json(place.into_dto())))
}

#[utoipa::path(
    get,
    path = "/",
    tag = PLACE_TAG,
    security(()),
    responses(
        (status = 200, description = "Successfully retrieved places", body = Vec<PlaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = PlaceService::new(&state.db).get_all().await?;
    let places_dto: Vec<_> = places.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(places_dto)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = PLACE_TAG,
    security(()),
    params(
        ("id" = String, Path, description = "Place ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved place with amenities", body = PlaceDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_place(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let place = PlaceService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(place.into_dto())))
}

/// PUT /api/v1/places/{id} - Update a listing
///
/// # Authentication
/// Requires a valid bearer token of the owner or an admin
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PLACE_TAG,
    params(
        ("id" = String, Path, description = "Place ID")
    ),
    request_body = UpdatePlaceDto,
    responses(
        (status = 200, description = "Successfully updated place", body = PlaceDto),
        (status = 400, description = "Invalid place data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the place", body = ErrorDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_place(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let place = PlaceService::new(&state.db)
        .update(&id, UpdatePlaceParam::from(payload), &caller.id, caller.is_admin)
        .await?;

    Ok((StatusCode::OK, Json(place.into_dto())))
}
