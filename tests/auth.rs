use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

use tasklist::auth::TokenService;
use tasklist::routes;
use tasklist::state::AppState;
use tasklist::store::{MemoryTaskStore, MemoryUserStore};

const TEST_SECRET: &str = "integration-test-secret";

fn test_state() -> AppState {
    AppState::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryTaskStore::new()),
        TokenService::new(TEST_SECRET),
        4, // minimum bcrypt cost, keeps the suite fast
    )
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::config),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_register_and_login_flow() {
    let app = test_app!(test_state());

    // Register a new user
    let register_payload = json!({
        "email": "integration@example.com",
        "name": "Integration User",
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["email"], "integration@example.com");
    assert_eq!(created["name"], "Integration User");
    assert!(created["id"].is_string());
    // The password hash must never appear in a response body.
    assert!(created.get("passwordHash").is_none());
    assert!(created.get("password_hash").is_none());

    // Registering the same email again conflicts and stores nothing new
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let users: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(users.as_array().unwrap().len(), 1);

    // Login with the registered credentials
    let login_payload = json!({
        "email": "integration@example.com",
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(&login_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let login: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(login["name"], "Integration User");
    let token = login["accessToken"].as_str().unwrap();
    assert!(!token.is_empty(), "accessToken should be a non-empty string");

    // The issued token verifies and carries the registered user as subject
    let verifier = TokenService::new(TEST_SECRET);
    let claims = verifier.verify(token).unwrap();
    assert_eq!(claims.sub.to_string(), created["id"].as_str().unwrap());
    assert_eq!(claims.email, "integration@example.com");
}

#[actix_rt::test]
async fn test_login_failures() {
    let app = test_app!(test_state());

    let register_payload = json!({
        "email": "carol@example.com",
        "name": "Carol",
        "password": "correct-horse"
    });
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    // Unknown email
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "email": "nobody@example.com",
            "password": "whatever"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    // Wrong password
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "email": "carol@example.com",
            "password": "battery-staple"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    // No hint about which of email or password was wrong
    assert_eq!(body["error"], "Invalid email or password");
}

#[actix_rt::test]
async fn test_register_validation() {
    let app = test_app!(test_state());

    // Invalid email
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({
            "email": "not-an-email",
            "name": "Test",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    // Short password
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({
            "email": "test@example.com",
            "name": "Test",
            "password": "123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    // Missing fields fail closed at deserialization
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({ "email": "test@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_rt::test]
async fn test_user_listing_and_lookup() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({
            "email": "dave@example.com",
            "name": "Dave",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Listing returns the user without the password hash
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let users: serde_json::Value = test::read_body_json(resp).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "dave@example.com");
    assert!(users[0].get("passwordHash").is_none());

    // Lookup by id
    let req = test::TestRequest::get()
        .uri(&format!("/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let user: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(user["id"], id.as_str());

    // Unknown id
    let req = test::TestRequest::get()
        .uri(&format!("/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    // Malformed id gets the standard JSON error envelope, not a bare 400
    let req = test::TestRequest::get().uri("/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
