use crate::server::{error::AppError, model::review::CreateReviewParam, service::review::ReviewService};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn review(user_id: &str, place_id: &str, rating: i32) -> CreateReviewParam {
    CreateReviewParam {
        text: "Great stay".to_string(),
        rating,
        user_id: user_id.to_string(),
        place_id: place_id.to_string(),
    }
}
