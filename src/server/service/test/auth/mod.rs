use std::time::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    extension::{password::PasswordHasher, token::TokenService},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
