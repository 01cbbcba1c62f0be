//! SeaORM entity definitions for the HBnB relational store.
//!
//! Each module maps one table created by the `migration` crate. Identifiers are
//! UUID strings generated by the application rather than database sequences.

pub mod prelude;

pub mod amenity;
pub mod booking;
pub mod payment;
pub mod place;
pub mod place_amenity;
pub mod review;
pub mod user;
