use crate::server::{
    error::{auth::AuthError, AppError},
    model::place::{CreatePlaceParam, UpdatePlaceParam},
    service::place::PlaceService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn place_param(owner_id: &str) -> CreatePlaceParam {
    CreatePlaceParam {
        title: "Seaside cottage".to_string(),
        description: String::new(),
        price: 90.0,
        latitude: 43.3,
        longitude: 5.4,
        owner_id: owner_id.to_string(),
        amenity_ids: Vec::new(),
    }
}
