use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::amenity::AmenityDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreatePlaceDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Nightly price
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// IDs of amenities offered by the place
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdatePlaceDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PlaceDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenities: Vec<AmenityDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
