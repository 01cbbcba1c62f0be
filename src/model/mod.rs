//! Data transfer objects shared by the API surface.
//!
//! These types define the JSON bodies accepted and returned by the HTTP API and
//! derive `ToSchema` so they appear in the generated OpenAPI document.

pub mod amenity;
pub mod api;
pub mod auth;
pub mod booking;
pub mod health;
pub mod payment;
pub mod place;
pub mod review;
pub mod user;
