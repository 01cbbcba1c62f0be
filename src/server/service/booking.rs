//! Booking service for business logic.
//!
//! Bookings are priced at creation time from the place's nightly price. Overlapping
//! stays are not checked.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, place::PlaceRepository},
    error::{auth::AuthError, AppError},
    model::booking::{Booking, CreateBookingParam},
};

/// Service providing business logic for bookings.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a place for the caller.
    ///
    /// # Arguments
    /// - `place_id` - Place to book
    /// - `user_id` - Authenticated guest
    /// - `check_in_date` - First night
    /// - `check_out_date` - Departure day, strictly after check-in
    ///
    /// # Returns
    /// - `Ok(Booking)` - Confirmed booking with `total_price = nights * price`
    /// - `Err(AppError::BadRequest)` - Check-out is not after check-in
    /// - `Err(AppError::NotFound)` - Place does not exist
    pub async fn create(
        &self,
        place_id: String,
        user_id: String,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Result<Booking, AppError> {
        let nights = (check_out_date - check_in_date).num_days();
        if nights <= 0 {
            return Err(AppError::BadRequest(
                "Check-out date must be after check-in date".to_string(),
            ));
        }

        let Some(place) = PlaceRepository::new(self.db).get_by_id(&place_id).await? else {
            return Err(AppError::NotFound("Place not found".to_string()));
        };

        let booking = BookingRepository::new(self.db)
            .create(CreateBookingParam {
                place_id,
                user_id,
                check_in_date,
                check_out_date,
                total_price: nights as f64 * place.price,
            })
            .await?;

        Ok(booking)
    }

    /// Retrieves a booking visible to the caller.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking owned by the caller, or any booking for an admin
    /// - `Err(AppError::NotFound)` - No booking with that ID
    /// - `Err(AuthError::Forbidden)` - Booking belongs to another user
    pub async fn get_by_id(
        &self,
        id: &str,
        caller_id: &str,
        caller_is_admin: bool,
    ) -> Result<Booking, AppError> {
        let Some(booking) = BookingRepository::new(self.db).get_by_id(id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if booking.user_id != caller_id && !caller_is_admin {
            return Err(AuthError::Forbidden("You can only view your own bookings".to_string()).into());
        }

        Ok(booking)
    }

    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).get_by_user(user_id).await?)
    }
}
