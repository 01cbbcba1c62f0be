use chrono::NaiveDate;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::booking::BookingService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 5, day).unwrap()
}
