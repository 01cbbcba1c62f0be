//! User service for business logic.
//!
//! This module provides the `UserService` for registration, lookups and profile updates.
//! Emails are normalized to lower case before they are stored or compared.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    extension::password::PasswordHasher,
    model::user::{CreateUserParam, RegisterUserParam, UpdateUserParam, User},
    service::conflict_on_unique,
};

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

const EMAIL_TAKEN: &str = "Email already registered";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates names, email and password length, rejects an email that is already
    /// registered, then stores the user with a bcrypt hash of the password. New users
    /// are never administrators.
    ///
    /// # Arguments
    /// - `param` - Registration input as received from the client
    /// - `passwords` - Hasher configured with the profile's cost
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::Conflict)` - Email is already registered
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(
        &self,
        param: RegisterUserParam,
        passwords: &PasswordHasher,
    ) -> Result<User, AppError> {
        let first_name = required_name("First name", &param.first_name)?;
        let last_name = required_name("Last name", &param.last_name)?;
        let email = normalize_email(&param.email)?;

        if param.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = passwords.hash(param.password).await?;

        user_repo
            .create(CreateUserParam {
                first_name,
                last_name,
                email,
                password_hash,
                is_admin: false,
            })
            .await
            .map_err(|e| conflict_on_unique(e, EMAIL_TAKEN))
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves all users ordered by registration time.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Updates a user's names.
    ///
    /// Only the user themselves or an administrator may update a profile. Provided
    /// names must not be blank.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `param` - Names to change
    /// - `caller_id` - ID of the authenticated caller
    /// - `caller_is_admin` - Whether the caller is an administrator
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AuthError::Forbidden)` - Caller is neither the user nor an admin
    /// - `Err(AppError::BadRequest)` - A provided name is blank
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update(
        &self,
        id: &str,
        param: UpdateUserParam,
        caller_id: &str,
        caller_is_admin: bool,
    ) -> Result<User, AppError> {
        if id != caller_id && !caller_is_admin {
            return Err(AuthError::Forbidden("You can only update your own profile".to_string()).into());
        }

        let param = UpdateUserParam {
            first_name: param
                .first_name
                .map(|name| required_name("First name", &name))
                .transpose()?,
            last_name: param
                .last_name
                .map(|name| required_name("Last name", &name))
                .transpose()?,
        };

        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn required_name(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims and lower-cases an email address, rejecting obviously malformed ones.
///
/// # Returns
/// - `Ok(String)` - Normalized address
/// - `Err(AppError::BadRequest)` - Address has no local part, no domain or whitespace
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    Ok(email)
}
