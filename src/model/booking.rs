use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateBookingDto {
    pub place_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BookingDto {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
