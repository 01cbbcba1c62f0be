use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParam, Review};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReviewParam) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            text: ActiveValue::Set(param.text),
            rating: ActiveValue::Set(param.rating),
            user_id: ActiveValue::Set(param.user_id),
            place_id: ActiveValue::Set(param.place_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets all reviews, newest first
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Checks whether the user has already reviewed the place
    pub async fn exists_for(&self, user_id: &str, place_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::PlaceId.eq(place_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
