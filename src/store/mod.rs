//!
//! # Store adapters
//!
//! The core never talks to the database directly; it goes through the narrow
//! `UserStore` / `TaskStore` contracts defined here. The binary wires in the
//! Postgres implementations, the test suites wire in the in-memory ones.
//!
//! Each operation is a single store call with per-call atomicity; no
//! operation spans multiple writes.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, User};

pub use memory::{MemoryTaskStore, MemoryUserStore};
pub use postgres::{PgTaskStore, PgUserStore};

/// Persistent record of user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. Fails with `Conflict` on a duplicate email.
    async fn insert(&self, user: &User) -> Result<(), AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn list(&self) -> Result<Vec<User>, AppError>;
}

/// Persistent record of tasks, always addressed by owner.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new task.
    async fn insert(&self, task: &Task) -> Result<(), AppError>;

    /// Returns one page of the owner's tasks in stable creation order:
    /// skip `skip` records, then return at most `take`.
    async fn list_page(&self, owner: Uuid, skip: i64, take: i64) -> Result<Vec<Task>, AppError>;

    /// Counts all tasks belonging to the owner.
    async fn count(&self, owner: Uuid) -> Result<i64, AppError>;
}
