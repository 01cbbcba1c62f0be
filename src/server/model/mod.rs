//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and
//! into DTOs at the controller boundary. Parameter types carry validated input from
//! services down to repositories.

pub mod amenity;
pub mod booking;
pub mod payment;
pub mod place;
pub mod review;
pub mod user;
