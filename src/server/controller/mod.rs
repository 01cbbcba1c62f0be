//! HTTP request handlers grouped by API namespace.
//!
//! Each namespace exposes a `router()` built with `utoipa-axum`, so the routes and the
//! OpenAPI document are generated from the same handler annotations.

pub mod amenity;
pub mod auth;
pub mod booking;
pub mod health;
pub mod payment;
pub mod place;
pub mod review;
pub mod user;
