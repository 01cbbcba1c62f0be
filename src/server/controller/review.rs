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
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::review::CreateReviewParam,
        service::review::ReviewService, state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "reviews";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_review, get_reviews))
        .routes(routes!(get_review))
}

#[utoipa::path(
    post,
    path = "/",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Invalid rating or own place", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Place not found", body = ErrorDto),
        (status = 409, description = "Place already reviewed by caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParam {
            text: payload.text,
            rating: payload.rating,
            user_id: author.id,
            place_id: payload.place_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/",
    tag = REVIEW_TAG,
    security(()),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).get_all().await?;
    let reviews_dto: Vec<_> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = REVIEW_TAG,
    security(()),
    params(
        ("id" = String, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}
