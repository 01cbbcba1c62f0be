use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::payment::{CreatePaymentParam, Payment, STATUS_COMPLETED};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a completed payment
    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            booking_id: ActiveValue::Set(param.booking_id),
            user_id: ActiveValue::Set(param.user_id),
            amount: ActiveValue::Set(param.amount),
            currency: ActiveValue::Set(param.currency),
            status: ActiveValue::Set(STATUS_COMPLETED.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }

    /// Finds the payment recorded for a booking, if any
    pub async fn find_by_booking(&self, booking_id: &str) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }
}
