//! Place factory for creating test listings.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test places owned by an existing user.
pub struct PlaceFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
}

impl<'a> PlaceFactory<'a> {
    /// Creates a new PlaceFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Place {id}"`
    /// - price: `100.0` per night
    /// - latitude/longitude: `48.857` / `2.352`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the user owning the place
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: owner_id.into(),
            title: format!("Place {}", id),
            description: "A quiet place to stay".to_string(),
            price: 100.0,
            latitude: 48.857,
            longitude: 2.352,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the place entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::place::Model)` - Created place entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::place::Model, DbErr> {
        let now = Utc::now();
        entity::place::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a place with default values owned by `owner_id`.
pub async fn create_place(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::place::Model, DbErr> {
    PlaceFactory::new(db, owner_id).build().await
}
