use sea_orm::DatabaseConnection;

use crate::server::{
    data::amenity::AmenityRepository, error::AppError, model::amenity::Amenity,
    service::conflict_on_unique,
};

const NAME_TAKEN: &str = "Amenity already exists";

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an amenity with a unique, non-blank name.
    ///
    /// # Returns
    /// - `Ok(Amenity)` - The created amenity
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::Conflict)` - An amenity with that name exists
    pub async fn create(&self, name: &str) -> Result<Amenity, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Amenity name is required".to_string()));
        }

        let repo = AmenityRepository::new(self.db);
        if repo.name_exists(name).await? {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        repo.create(name.to_string())
            .await
            .map_err(|e| conflict_on_unique(e, NAME_TAKEN))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Amenity, AppError> {
        AmenityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Amenity>, AppError> {
        Ok(AmenityRepository::new(self.db).get_all().await?)
    }
}
