use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::user::OwnerRef;

/// Input structure for creating a task.
///
/// There is deliberately no owner field here: the owner is always the
/// authenticated subject, and unknown payload fields are ignored.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// A description of the task.
    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    pub description: String,

    /// Completion status. Defaults to incomplete when absent.
    pub status: Option<bool>,
}

/// Represents a task entity as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// A description of the task.
    pub description: String,
    /// Whether the task is complete.
    pub status: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the task. Fixed at creation.
    pub user_id: Uuid,
}

impl Task {
    /// Creates a new `Task` owned by `user_id`, with a fresh id and
    /// timestamps. The owner comes from the authenticated subject, never
    /// from the input payload.
    pub fn new(input: TaskInput, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or(false),
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}

/// A task joined with its owner's display data, as returned by the
/// paginated listing. The owner nests under the capitalized `User` key on
/// the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskWithOwner {
    #[serde(flatten)]
    pub task: Task,
    #[serde(rename = "User")]
    pub user: OwnerRef,
}

/// Response body of the paginated task listing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedTasks {
    pub tasks: Vec<TaskWithOwner>,
    pub amount_items: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let input = TaskInput {
            title: "Test Task".to_string(),
            description: "Test Description".to_string(),
            status: Some(true),
        };

        let owner = Uuid::new_v4();
        let task = Task::new(input, owner);
        assert_eq!(task.title, "Test Task");
        assert_eq!(task.user_id, owner);
        assert!(task.status);
    }

    #[test]
    fn test_status_defaults_to_incomplete() {
        let input = TaskInput {
            title: "No status".to_string(),
            description: "".to_string(),
            status: None,
        };
        let task = Task::new(input, Uuid::new_v4());
        assert!(!task.status);
    }

    #[test]
    fn test_task_validation() {
        let valid_input = TaskInput {
            title: "Valid Task".to_string(),
            description: "Valid Description".to_string(),
            status: None,
        };
        assert!(valid_input.validate().is_ok());

        let invalid_input = TaskInput {
            title: "".to_string(), // Empty title
            description: "Valid Description".to_string(),
            status: None,
        };
        assert!(invalid_input.validate().is_err());

        let long_title = "a".repeat(201);
        let invalid_input = TaskInput {
            title: long_title,
            description: "Valid Description".to_string(),
            status: None,
        };
        assert!(invalid_input.validate().is_err());

        let long_description = "b".repeat(1001);
        let invalid_input = TaskInput {
            title: "Valid title".to_string(),
            description: long_description,
            status: None,
        };
        assert!(invalid_input.validate().is_err());
    }

    #[test]
    fn test_listing_wire_format() {
        let input = TaskInput {
            title: "t".to_string(),
            description: "d".to_string(),
            status: None,
        };
        let owner_id = Uuid::new_v4();
        let task = Task::new(input, owner_id);
        let listed = TaskWithOwner {
            task,
            user: OwnerRef {
                name: "Alice".to_string(),
                id: owner_id,
            },
        };

        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json["title"], "t");
        assert_eq!(json["userId"], owner_id.to_string());
        assert_eq!(json["User"]["name"], "Alice");
        assert_eq!(json["User"]["id"], owner_id.to_string());
        assert!(json.get("user").is_none());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
