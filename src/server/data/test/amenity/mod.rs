use crate::server::data::amenity::AmenityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_missing;
