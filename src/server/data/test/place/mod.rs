use crate::server::{
    data::place::PlaceRepository,
    model::place::{CreatePlaceParam, UpdatePlaceParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
