use chrono::{DateTime, Utc};

use crate::model::payment::PaymentDto;

pub const STATUS_COMPLETED: &str = "completed";
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            booking_id: self.booking_id,
            user_id: self.user_id,
            amount: self.amount,
            currency: self.currency,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            user_id: entity.user_id,
            amount: entity.amount,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub booking_id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
}
