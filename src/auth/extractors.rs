use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the authenticated subject from request extensions.
///
/// This extractor is used on routes protected by `AuthGuard`, which verifies
/// the bearer token and inserts the resulting `Claims` into request
/// extensions. The wrapped value is the verified subject's user id.
///
/// If no claims are present (e.g. the guard was not applied), the extractor
/// fails with `AppError::Unauthorized` rather than proceeding without an
/// identity.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError is converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser(claims.sub))),
            None => {
                let err = AppError::Unauthorized(
                    "No authenticated subject. Ensure AuthGuard is active.".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
