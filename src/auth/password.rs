use crate::error::AppError;
use bcrypt::{hash, verify};

/// Work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hashes a plaintext password with a per-call random salt.
/// The plaintext is never logged and never appears in the error path.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored bcrypt digest.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}
