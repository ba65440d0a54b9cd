use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a user account as stored and as returned by the API.
///
/// The password hash is never serialized into a response body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user (UUID v4).
    pub id: Uuid,
    /// Email address, unique across all users.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Bcrypt digest of the user's password.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Timestamp of when the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new `User` with a fresh id and creation timestamp.
    /// `password_hash` must already be a bcrypt digest, never a plaintext.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Minimal owner display data joined onto listed tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerRef {
    pub name: String,
    pub id: Uuid,
}

impl From<&User> for OwnerRef {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            id: user.id,
        }
    }
}
