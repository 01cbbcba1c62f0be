//! Place service for business logic.
//!
//! Validates listing fields and ownership before delegating to `PlaceRepository`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{amenity::AmenityRepository, place::PlaceRepository},
    error::{auth::AuthError, AppError},
    model::place::{CreatePlaceParam, Place, UpdatePlaceParam},
};

/// Service providing business logic for place listings.
pub struct PlaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceService<'a> {
    /// Creates a new PlaceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a place owned by the caller.
    ///
    /// Validates title, price and coordinates, and requires every referenced amenity to
    /// exist before anything is written.
    ///
    /// # Arguments
    /// - `param` - Place fields with the caller as owner
    ///
    /// # Returns
    /// - `Ok(Place)` - The created place with its amenities
    /// - `Err(AppError::BadRequest)` - A field is out of range or an amenity is unknown
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, mut param: CreatePlaceParam) -> Result<Place, AppError> {
        validate_title(&param.title)?;
        validate_price(param.price)?;
        validate_latitude(param.latitude)?;
        validate_longitude(param.longitude)?;

        param.amenity_ids.sort();
        param.amenity_ids.dedup();

        let missing = AmenityRepository::new(self.db)
            .find_missing(&param.amenity_ids)
            .await?;
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unknown amenities: {}",
                missing.join(", ")
            )));
        }

        Ok(PlaceRepository::new(self.db).create(param).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Place, AppError> {
        PlaceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Place not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Place>, AppError> {
        Ok(PlaceRepository::new(self.db).get_all().await?)
    }

    /// Updates a place owned by the caller.
    ///
    /// # Arguments
    /// - `id` - ID of the place to update
    /// - `param` - Fields to change, validated like on creation
    /// - `caller_id` - ID of the authenticated caller
    /// - `caller_is_admin` - Administrators may update any place
    ///
    /// # Returns
    /// - `Ok(Place)` - The updated place
    /// - `Err(AppError::NotFound)` - No place with that ID
    /// - `Err(AuthError::Forbidden)` - Caller neither owns the place nor is an admin
    /// - `Err(AppError::BadRequest)` - A provided field is out of range
    pub async fn update(
        &self,
        id: &str,
        param: UpdatePlaceParam,
        caller_id: &str,
        caller_is_admin: bool,
    ) -> Result<Place, AppError> {
        let place = self.get_by_id(id).await?;
        if place.owner_id != caller_id && !caller_is_admin {
            return Err(AuthError::Forbidden("You can only update your own places".to_string()).into());
        }

        if let Some(title) = &param.title {
            validate_title(title)?;
        }
        if let Some(price) = param.price {
            validate_price(price)?;
        }
        if let Some(latitude) = param.latitude {
            validate_latitude(latitude)?;
        }
        if let Some(longitude) = param.longitude {
            validate_longitude(longitude)?;
        }

        PlaceRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Place not found".to_string()))
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest("Price must be a non-negative number".to_string()));
    }
    Ok(())
}

fn validate_latitude(latitude: f64) -> Result<(), AppError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::BadRequest("Latitude must be between -90 and 90".to_string()));
    }
    Ok(())
}

fn validate_longitude(longitude: f64) -> Result<(), AppError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::BadRequest(
            "Longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}
