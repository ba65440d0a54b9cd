use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenService;
use crate::config::Config;
use crate::store::{PgTaskStore, PgUserStore, TaskStore, UserStore};

/// Shared, read-only application state handed to every handler.
///
/// Holds the store adapters, the token service with its precomputed signing
/// keys, and the password hashing cost. Built once at startup; nothing in it
/// is mutated afterwards.
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: TokenService,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        tasks: Arc<dyn TaskStore>,
        tokens: TokenService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            tasks,
            tokens,
            bcrypt_cost,
        }
    }

    /// Wires the Postgres store adapters against the given pool.
    pub fn with_postgres(pool: PgPool, config: &Config) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgTaskStore::new(pool)),
            TokenService::new(&config.jwt_secret),
            config.bcrypt_cost,
        )
    }
}
