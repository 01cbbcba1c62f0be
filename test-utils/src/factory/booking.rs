//! Booking factory for creating confirmed test bookings.

use crate::factory::helpers::new_uuid;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a confirmed three-night booking starting 2030-01-10.
///
/// The total price is three nights at the place's nightly price.
///
/// # Arguments
/// - `db` - Database connection
/// - `place` - Place being booked
/// - `guest_id` - ID of the booking user
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    place: &entity::place::Model,
    guest_id: &str,
) -> Result<entity::booking::Model, DbErr> {
    let check_in = NaiveDate::from_ymd_opt(2030, 1, 10)
        .ok_or_else(|| DbErr::Custom("invalid check-in date".to_string()))?;
    let check_out = check_in
        .checked_add_days(Days::new(3))
        .ok_or_else(|| DbErr::Custom("invalid check-out date".to_string()))?;

    entity::booking::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        place_id: ActiveValue::Set(place.id.clone()),
        user_id: ActiveValue::Set(guest_id.to_string()),
        check_in_date: ActiveValue::Set(check_in),
        check_out_date: ActiveValue::Set(check_out),
        total_price: ActiveValue::Set(place.price * 3.0),
        status: ActiveValue::Set("confirmed".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
