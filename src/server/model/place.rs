//! Place domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::place::{CreatePlaceDto, PlaceDto, UpdatePlaceDto},
    server::model::amenity::Amenity,
};

/// Listing with the amenities it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenities: Vec<Amenity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    pub fn into_dto(self) -> PlaceDto {
        PlaceDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            latitude: self.latitude,
            longitude: self.longitude,
            owner_id: self.owner_id,
            amenities: self.amenities.into_iter().map(Amenity::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model and its loaded amenities to a place domain model.
    ///
    /// # Arguments
    /// - `entity` - The place entity from the database
    /// - `amenities` - Amenities linked to the place
    pub fn from_entity(entity: entity::place::Model, amenities: Vec<Amenity>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            latitude: entity.latitude,
            longitude: entity.longitude,
            owner_id: entity.owner_id,
            amenities,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlaceParam {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenity_ids: Vec<String>,
}

impl CreatePlaceParam {
    /// Builds creation parameters for a place owned by `owner_id`.
    pub fn from_dto(dto: CreatePlaceDto, owner_id: String) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            price: dto.price,
            latitude: dto.latitude,
            longitude: dto.longitude,
            owner_id,
            amenity_ids: dto.amenities,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlaceParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdatePlaceDto> for UpdatePlaceParam {
    fn from(dto: UpdatePlaceDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            price: dto.price,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}
