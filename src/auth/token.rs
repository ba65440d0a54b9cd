use crate::error::AppError;
use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the claims encoded within an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: Uuid,
    /// Email of the user the token was issued for.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Stateless issuer and verifier of signed access tokens.
///
/// The signing secret is injected once at startup (from `Config`) and the
/// encoding/decoding keys are precomputed here; nothing else in the process
/// ever sees the secret. Tokens live for 24 hours.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service with the standard 24-hour token lifetime.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::hours(24))
    }

    /// Creates a token service with an explicit token lifetime.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a signed token for the given user.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalServerError("Token expiry out of range".into()))?;

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry and decodes its claims.
    ///
    /// Every protected route funnels through this check; the subject claim is
    /// never trusted from a bare decode.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Forbidden("Invalid or expired token".into()))
    }
}
