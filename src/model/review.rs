use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateReviewDto {
    pub text: String,
    /// 1 to 5 stars
    pub rating: i32,
    pub place_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ReviewDto {
    pub id: String,
    pub text: String,
    pub rating: i32,
    pub user_id: String,
    pub place_id: String,
    pub created_at: DateTime<Utc>,
}
