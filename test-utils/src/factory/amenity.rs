//! Amenity factory for creating test amenities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an amenity named `"Amenity {id}"`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::amenity::Model)` - Created amenity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_amenity(db: &DatabaseConnection) -> Result<entity::amenity::Model, DbErr> {
    create_amenity_named(db, &format!("Amenity {}", next_id())).await
}

/// Creates an amenity with the provided name.
pub async fn create_amenity_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::amenity::Model, DbErr> {
    entity::amenity::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
