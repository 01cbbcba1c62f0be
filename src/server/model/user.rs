//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// Registered user including the stored password hash.
///
/// The hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    /// Lower-cased email address
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Name changes; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParam {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Registration input before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<CreateUserDto> for RegisterUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
        }
    }
}
