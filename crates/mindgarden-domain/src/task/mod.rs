mod aggregate;
mod repository;
mod value_objects;

pub use aggregate::{Task, TaskDraft, DEFAULT_ESTIMATED_MINUTES};
pub use repository::{TaskCounts, TaskFilter, TaskRepository, DEFAULT_TASK_LIMIT, MAX_TASK_LIMIT};
pub use value_objects::{TaskPriority, TaskStatus};
