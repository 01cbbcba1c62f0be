//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the validation rules of each resource
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod amenity;
pub mod auth;
pub mod booking;
pub mod payment;
pub mod place;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique constraint violation to `AppError::Conflict`.
///
/// Applied to inserts guarded by a duplicate check, for requests that race past it.
///
/// # Arguments
/// - `err` - Database error returned by an insert
/// - `message` - Conflict message returned to the client
fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}
