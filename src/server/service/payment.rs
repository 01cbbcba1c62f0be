//! Payment service for business logic.
//!
//! Payments are recorded as completed immediately; no external gateway is contacted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, payment::PaymentRepository},
    error::{auth::AuthError, AppError},
    model::payment::{CreatePaymentParam, Payment, DEFAULT_CURRENCY},
    service::conflict_on_unique,
};

const ALREADY_PAID: &str = "Booking has already been paid";

/// Service providing business logic for payments.
pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pays for one of the caller's bookings.
    ///
    /// The amount is always the booking's total price. Currency codes are upper-cased
    /// and default to USD.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to pay for
    /// - `user_id` - Authenticated caller, who must own the booking
    /// - `currency` - Optional three-letter currency code
    ///
    /// # Returns
    /// - `Ok(Payment)` - Completed payment
    /// - `Err(AppError::BadRequest)` - Currency is not a three-letter code
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AuthError::Forbidden)` - Booking belongs to another user
    /// - `Err(AppError::Conflict)` - Booking already has a payment
    pub async fn create(
        &self,
        booking_id: String,
        user_id: String,
        currency: Option<String>,
    ) -> Result<Payment, AppError> {
        let currency = match currency {
            Some(code) => normalize_currency(&code)?,
            None => DEFAULT_CURRENCY.to_string(),
        };

        let Some(booking) = BookingRepository::new(self.db).get_by_id(&booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };
        if booking.user_id != user_id {
            return Err(AuthError::Forbidden("You can only pay for your own bookings".to_string()).into());
        }

        let repo = PaymentRepository::new(self.db);
        if repo.find_by_booking(&booking_id).await?.is_some() {
            return Err(AppError::Conflict(ALREADY_PAID.to_string()));
        }

        repo.create(CreatePaymentParam {
            booking_id,
            user_id,
            amount: booking.total_price,
            currency,
        })
        .await
        .map_err(|e| conflict_on_unique(e, ALREADY_PAID))
    }

    /// Retrieves a payment visible to the caller.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Payment made by the caller, or any payment for an admin
    /// - `Err(AppError::NotFound)` - No payment with that ID
    /// - `Err(AuthError::Forbidden)` - Payment belongs to another user
    pub async fn get_by_id(
        &self,
        id: &str,
        caller_id: &str,
        caller_is_admin: bool,
    ) -> Result<Payment, AppError> {
        let Some(payment) = PaymentRepository::new(self.db).get_by_id(id).await? else {
            return Err(AppError::NotFound("Payment not found".to_string()));
        };

        if payment.user_id != caller_id && !caller_is_admin {
            return Err(AuthError::Forbidden("You can only view your own payments".to_string()).into());
        }

        Ok(payment)
    }
}

fn normalize_currency(code: &str) -> Result<String, AppError> {
    let code = code.trim().to_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "Currency must be a three-letter code".to_string(),
        ));
    }
    Ok(code)
}
