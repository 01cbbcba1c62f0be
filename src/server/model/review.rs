use chrono::{DateTime, Utc};

use crate::model::review::ReviewDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: i32,
    pub user_id: String,
    pub place_id: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            text: self.text,
            rating: self.rating,
            user_id: self.user_id,
            place_id: self.place_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            rating: entity.rating,
            user_id: entity.user_id,
            place_id: entity.place_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub text: String,
    pub rating: i32,
    pub user_id: String,
    pub place_id: String,
}
