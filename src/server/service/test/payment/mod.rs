use crate::server::{
    error::{auth::AuthError, AppError},
    service::payment::PaymentService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
