//! Place data repository.
//!
//! Places are always returned together with their amenities, loaded through the
//! `place_amenity` join table in one query per call rather than one per place.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    amenity::Amenity,
    place::{CreatePlaceParam, Place, UpdatePlaceParam},
};

pub struct PlaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a place and links the given amenities.
    ///
    /// # Arguments
    /// - `param` - Place fields, owner and amenity IDs (assumed to exist)
    ///
    /// # Returns
    /// - `Ok(Place)` - The created place with its amenities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePlaceParam) -> Result<Place, DbErr> {
        let now = Utc::now();
        let place = entity::place::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            owner_id: ActiveValue::Set(param.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for amenity_id in param.amenity_ids {
            entity::place_amenity::ActiveModel {
                place_id: ActiveValue::Set(place.id.clone()),
                amenity_id: ActiveValue::Set(amenity_id),
            }
            .insert(self.db)
            .await?;
        }

        let mut amenities = self.amenities_by_place(&[place.id.clone()]).await?;
        let linked = amenities.remove(&place.id).unwrap_or_default();

        Ok(Place::from_entity(place, linked))
    }

    /// Gets a place by ID with its amenities.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Place>, DbErr> {
        let Some(place) = entity::prelude::Place::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut amenities = self.amenities_by_place(&[place.id.clone()]).await?;
        let linked = amenities.remove(&place.id).unwrap_or_default();

        Ok(Some(Place::from_entity(place, linked)))
    }

    /// Gets all places, newest first, with their amenities.
    pub async fn get_all(&self) -> Result<Vec<Place>, DbErr> {
        let places = entity::prelude::Place::find()
            .order_by_desc(entity::place::Column::CreatedAt)
            .all(self.db)
            .await?;

        let ids: Vec<String> = places.iter().map(|p| p.id.clone()).collect();
        let mut amenities = self.amenities_by_place(&ids).await?;

        Ok(places
            .into_iter()
            .map(|place| {
                let linked = amenities.remove(&place.id).unwrap_or_default();
                Place::from_entity(place, linked)
            })
            .collect())
    }

    /// Updates the provided place fields.
    ///
    /// # Returns
    /// - `Ok(Some(Place))` - The updated place
    /// - `Ok(None)` - No place with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, param: UpdatePlaceParam) -> Result<Option<Place>, DbErr> {
        let Some(place) = entity::prelude::Place::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::place::ActiveModel = place.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(latitude) = param.latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = param.longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let place = active_model.update(self.db).await?;
        let mut amenities = self.amenities_by_place(&[place.id.clone()]).await?;
        let linked = amenities.remove(&place.id).unwrap_or_default();

        Ok(Some(Place::from_entity(place, linked)))
    }

    /// Loads amenities for each place ID, keyed by place ID.
    async fn amenities_by_place(
        &self,
        place_ids: &[String],
    ) -> Result<HashMap<String, Vec<Amenity>>, DbErr> {
        if place_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::PlaceAmenity::find()
            .filter(entity::place_amenity::Column::PlaceId.is_in(place_ids.iter().cloned()))
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let amenities: HashMap<String, entity::amenity::Model> = entity::prelude::Amenity::find()
            .filter(
                entity::amenity::Column::Id.is_in(links.iter().map(|l| l.amenity_id.clone())),
            )
            .order_by_asc(entity::amenity::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();

        let mut by_place: HashMap<String, Vec<Amenity>> = HashMap::new();
        for link in links {
            if let Some(amenity) = amenities.get(&link.amenity_id) {
                by_place
                    .entry(link.place_id)
                    .or_default()
                    .push(Amenity::from_entity(amenity.clone()));
            }
        }
        for linked in by_place.values_mut() {
            linked.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(by_place)
    }
}
