use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Service health probe.
///
/// Unauthenticated, outside the task scope. Reports that the server is up,
/// which build is running, and the current server time.
///
/// ## Responses:
/// - `200 OK`: `{"status": "ok", "service": ..., "version": ..., "timestamp": ...}`.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}
