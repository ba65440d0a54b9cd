use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, User};
use crate::store::{TaskStore, UserStore};

/// `UserStore` held in process memory.
///
/// Mirrors the Postgres adapter's contracts, including the duplicate-email
/// conflict. Used by the test suites and for running the server without a
/// database.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Record already exists".into()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }
}

/// `TaskStore` held in process memory, in insertion (creation) order.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, task: &Task) -> Result<(), AppError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(())
    }

    async fn list_page(&self, owner: Uuid, skip: i64, take: i64) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.user_id == owner)
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, owner: Uuid) -> Result<i64, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().filter(|t| t.user_id == owner).count() as i64)
    }
}
