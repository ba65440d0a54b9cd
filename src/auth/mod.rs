pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthGuard;
pub use password::{hash_password, verify_password, DEFAULT_BCRYPT_COST};
pub use token::{Claims, TokenService};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Display name for the new account.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Response structure after a successful login: the access token and the
/// user's display name. Serialized with the wire field names the API's
/// clients expect.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The signed bearer token for subsequent requests.
    pub access_token: String,
    /// The authenticated user's display name.
    pub name: String,
}
