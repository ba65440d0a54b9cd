pub mod task;
pub mod user;

pub use task::{PagedTasks, Task, TaskInput, TaskWithOwner};
pub use user::{OwnerRef, User};
