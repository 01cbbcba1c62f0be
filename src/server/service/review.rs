use sea_orm::DatabaseConnection;

use crate::server::{
    data::{place::PlaceRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParam, Review},
};

/// Lowest and highest accepted rating.
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review of a place by the caller.
    ///
    /// Owners cannot review their own place and each user reviews a place at most once.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::BadRequest)` - Empty text, rating out of range or own place
    /// - `Err(AppError::NotFound)` - Place does not exist
    /// - `Err(AppError::Conflict)` - Caller already reviewed the place
    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, AppError> {
        if param.text.trim().is_empty() {
            return Err(AppError::BadRequest("Review text is required".to_string()));
        }
        if !RATING_RANGE.contains(&param.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let Some(place) = PlaceRepository::new(self.db)
            .get_by_id(&param.place_id)
            .await?
        else {
            return Err(AppError::NotFound("Place not found".to_string()));
        };
        if place.owner_id == param.user_id {
            return Err(AppError::BadRequest(
                "You cannot review your own place".to_string(),
            ));
        }

        let repo = ReviewRepository::new(self.db);
        if repo.exists_for(&param.user_id, &param.place_id).await? {
            return Err(AppError::Conflict(
                "You have already reviewed this place".to_string(),
            ));
        }

        Ok(repo.create(param).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }
}
