use std::env;

use crate::auth::password::DEFAULT_BCRYPT_COST;

/// Process configuration, read once at startup.
///
/// The token-signing secret is injected here rather than read (or worse,
/// hard-coded) at the point of use; `TokenService` receives it when the
/// application state is built.
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3333".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            bcrypt_cost: env::var("BCRYPT_COST")
                .map(|v| v.parse().expect("BCRYPT_COST must be a number"))
                .unwrap_or(DEFAULT_BCRYPT_COST),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
