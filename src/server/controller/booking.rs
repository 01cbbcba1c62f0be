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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_booking, get_bookings))
        .routes(routes!(get_booking))
}

/// POST /api/v1/bookings - Book a place for the caller
///
/// # Returns
/// - `201 Created`: Confirmed booking priced at nights times the nightly price
/// - `400 Bad Request`: Check-out is not after check-in
/// - `404 Not Found`: Place does not exist
#[utoipa::path(
    post,
    path = "/",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let guest = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(
            payload.place_id,
            guest.id,
            payload.check_in_date,
            payload.check_out_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    get,
    path = "/",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings of the caller", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guest = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let bookings = BookingService::new(&state.db).get_for_user(&guest.id).await?;
    let bookings_dto: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = String, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .get_by_id(&id, &caller.id, caller.is_admin)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
