use crate::server::error::{startup::ExtensionInitError, AppError};

/// Bcrypt password hashing with a fixed work factor.
///
/// Hashing is CPU bound, so both operations run on tokio's blocking pool instead of
/// stalling the request executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost.
    ///
    /// # Returns
    /// - `Ok(PasswordHasher)` - Cost is within the range bcrypt accepts
    /// - `Err(ExtensionInitError::PasswordHashing)` - Cost is outside 4..=31
    pub fn new(cost: u32) -> Result<Self, ExtensionInitError> {
        if !(4..=31).contains(&cost) {
            return Err(ExtensionInitError::PasswordHashing(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plain-text password.
    ///
    /// # Returns
    /// - `Ok(String)` - Bcrypt hash including salt and cost
    /// - `Err(AppError::InternalError)` - Hashing failed or the blocking task panicked
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Checks a plain-text password against a stored hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::InternalError)` - Stored hash is malformed or the task panicked
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))
    }
}
