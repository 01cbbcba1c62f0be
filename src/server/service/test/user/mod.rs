use crate::server::{
    error::{auth::AuthError, AppError},
    extension::password::PasswordHasher,
    model::user::{RegisterUserParam, UpdateUserParam},
    service::user::{normalize_email, UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod register;
mod update;

fn registration(email: &str) -> RegisterUserParam {
    RegisterUserParam {
        first_name: " Ada ".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
    }
}

fn hasher() -> PasswordHasher {
    PasswordHasher::new(4).unwrap()
}
