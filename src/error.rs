//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! represent everything from validation failures to store errors.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into HTTP responses with JSON bodies. It also provides
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError`, so handlers can
//! use the `?` operator throughout.
//!
//! Internal failures (store or hashing errors) are logged with their details
//! but surfaced to clients with a generic message only.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// No credentials were presented, or the credentials were wrong (HTTP 401).
    /// Covers a missing bearer token and a failed password check.
    Unauthorized(String),
    /// Credentials were presented but are not acceptable (HTTP 403).
    /// Covers invalid, tampered, or expired tokens.
    Forbidden(String),
    /// A uniqueness constraint was violated, e.g. a duplicate email (HTTP 409).
    Conflict(String),
    /// A requested record does not exist (HTTP 404).
    NotFound(String),
    /// Input validation failed (HTTP 422 Unprocessable Entity).
    /// Covers malformed pagination parameters and invalid payload fields.
    ValidationError(String),
    /// An error originating from the persistence adapter (HTTP 500).
    DatabaseError(String),
    /// Any other unexpected server-side failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// Client-caused errors carry their message in the body; internal errors are
/// logged and replaced with a generic message so store or hashing details
/// never reach the client.
impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
            AppError::DatabaseError(msg) => {
                log::error!("store failure: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
            AppError::InternalServerError(msg) => {
                log::error!("internal failure: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`; unique-key violations map to `Conflict`
/// as a backstop behind the explicit duplicate-email check; everything else
/// becomes `DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Record already exists".into())
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`,
/// preserving the field-level messages.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Forbidden`.
///
/// Token processing failures (bad signature, malformed token, expiry) all
/// mean the presented credentials are not acceptable.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Forbidden(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
