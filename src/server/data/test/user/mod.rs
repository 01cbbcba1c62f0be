use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod update;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        is_admin: false,
    }
}
