use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::amenity::Amenity;

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new amenity
    pub async fn create(&self, name: String) -> Result<Amenity, DbErr> {
        let entity = entity::amenity::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Amenity::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Amenity>, DbErr> {
        let entity = entity::prelude::Amenity::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Amenity::from_entity))
    }

    /// Gets all amenities ordered by name
    pub async fn get_all(&self) -> Result<Vec<Amenity>, DbErr> {
        let entities = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Amenity::from_entity).collect())
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the IDs from `ids` that do not name an existing amenity
    pub async fn find_missing(&self, ids: &[String]) -> Result<Vec<String>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<String> = entity::prelude::Amenity::find()
            .filter(entity::amenity::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();

        Ok(ids
            .iter()
            .filter(|id| !found.contains(id))
            .cloned()
            .collect())
    }
}
