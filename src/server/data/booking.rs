use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParam, STATUS_CONFIRMED};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a confirmed booking
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            place_id: ActiveValue::Set(param.place_id),
            user_id: ActiveValue::Set(param.user_id),
            check_in_date: ActiveValue::Set(param.check_in_date),
            check_out_date: ActiveValue::Set(param.check_out_date),
            total_price: ActiveValue::Set(param.total_price),
            status: ActiveValue::Set(STATUS_CONFIRMED.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets a user's bookings ordered by check-in date
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::booking::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }
}
