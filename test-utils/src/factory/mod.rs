//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert their own foreign-key dependencies when
//! none are supplied.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let place = factory::place::create_place(&db, &user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with a known password
//! - `place` - Create place entities owned by a user
//! - `amenity` - Create amenity entities
//! - `booking` - Create booking entities for a place and guest
//! - `helpers` - Shared ID generation

pub mod amenity;
pub mod booking;
pub mod helpers;
pub mod place;
pub mod user;

pub use amenity::create_amenity;
pub use booking::create_booking;
pub use place::create_place;
pub use user::create_user;
