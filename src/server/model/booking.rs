use chrono::{DateTime, NaiveDate, Utc};

use crate::model::booking::BookingDto;

pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            place_id: self.place_id,
            user_id: self.user_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            total_price: self.total_price,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            place_id: entity.place_id,
            user_id: entity.user_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            total_price: entity.total_price,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for a booking whose dates and price have been validated.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub place_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: f64,
}
