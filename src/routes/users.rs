use crate::{
    auth::{hash_password, verify_password, LoginRequest, LoginResponse, RegisterRequest},
    error::AppError,
    models::User,
    state::AppState,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Register a new user
///
/// Creates a new account from `{email, name, password}` and returns the
/// created user. The password is hashed before it goes anywhere near the
/// store, and the hash is excluded from the response.
///
/// Mounted as `POST /` next to the user listing; see `routes::config`.
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if email already exists
    if state
        .users
        .find_by_email(&register_data.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("User already exists".into()));
    }

    // Hash password
    let password_hash = hash_password(&register_data.password, state.bcrypt_cost)?;

    let register_data = register_data.into_inner();
    let user = User::new(register_data.email, register_data.name, password_hash);
    state.users.insert(&user).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login
///
/// Authenticates by email and password and returns a 24-hour access token
/// together with the user's display name. An unknown email yields 404, a
/// wrong password 401 with no hint about which field was wrong.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = state
        .users
        .find_by_email(&login_data.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let token = state.tokens.issue(user.id, &user.email)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: token,
        name: user.name,
    }))
}

/// List all users
///
/// Administrative convenience; responses never include password hashes.
/// Mounted as `GET /` next to registration; see `routes::config`.
pub async fn list_users(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Look up a user by id
///
/// The id segment is parsed here rather than in the path extractor so a
/// malformed id gets the same `{"error": ...}` envelope as every other
/// failure.
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| AppError::ValidationError("id must be a valid UUID".into()))?;
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(HttpResponse::Ok().json(user))
}
