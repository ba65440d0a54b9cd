use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::error::AppError;
use crate::state::AppState;

/// The single choke point for task routes.
///
/// Wrapped around the `/task` scope, it extracts the bearer token from the
/// `Authorization` header, performs a full verification through the
/// `TokenService` (signature and expiry, never a bare decode), and inserts
/// the verified `Claims` into request extensions for the
/// `AuthenticatedUser` extractor.
///
/// A missing or non-bearer header yields 401; a token that fails
/// verification yields 403.
pub struct AuthGuard;

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardService { service }))
    }
}

pub struct AuthGuardService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = match bearer {
            Some(token) => token,
            None => {
                let app_err = AppError::Unauthorized("Token not found".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.clone(),
            None => {
                let app_err =
                    AppError::InternalServerError("Application state not configured".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        match state.tokens.verify(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
        }
    }
}
