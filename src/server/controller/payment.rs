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
        payment::{CreatePaymentDto, PaymentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payments";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_payment))
        .routes(routes!(get_payment))
}

#[utoipa::path(
    post,
    path = "/",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded as completed", body = PaymentDto),
        (status = 400, description = "Invalid currency", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create(payload.booking_id, payer.id, payload.currency)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payment", body = PaymentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Payment belongs to another user", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payment = PaymentService::new(&state.db)
        .get_by_id(&id, &caller.id, caller.is_admin)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
