//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity types out of the business logic layer.

pub mod amenity;
pub mod booking;
pub mod payment;
pub mod place;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
