use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_for;
