use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, User};
use crate::store::{TaskStore, UserStore};

/// `UserStore` backed by the `users` table.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        // The unique index on email backstops the handler's duplicate check;
        // a violation surfaces as Conflict via the sqlx::Error conversion.
        sqlx::query(
            "INSERT INTO users (id, email, name, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password_hash, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password_hash, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password_hash, created_at
             FROM users ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

/// `TaskStore` backed by the `tasks` table.
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn insert(&self, task: &Task) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO tasks (id, title, description, status, created_at, updated_at, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.created_at)
        .bind(task.updated_at)
        .bind(task.user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_page(&self, owner: Uuid, skip: i64, take: i64) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, created_at, updated_at, user_id
             FROM tasks WHERE user_id = $1
             ORDER BY created_at, id
             OFFSET $2 LIMIT $3",
        )
        .bind(owner)
        .bind(skip)
        .bind(take)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn count(&self, owner: Uuid) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE user_id = $1")
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
