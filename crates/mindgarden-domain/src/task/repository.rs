use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{Task, TaskPriority, TaskStatus};
use crate::shared::{DomainError, TaskId, UserId};

pub const DEFAULT_TASK_LIMIT: u32 = 100;
pub const MAX_TASK_LIMIT: u32 = 500;

/// Listing filter. Results are ordered by due date with undated tasks last.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    /// Half-open `[start, end)` window on `due_date`; undated tasks never match.
    pub due_between: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub completed: Option<bool>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            due_between: None,
            completed: None,
            limit: DEFAULT_TASK_LIMIT,
            offset: 0,
        }
    }
}

impl TaskFilter {
    pub fn with_limit(mut self, limit: Option<u32>) -> Result<Self, DomainError> {
        if let Some(limit) = limit {
            if limit == 0 || limit > MAX_TASK_LIMIT {
                return Err(DomainError::Validation(format!(
                    "limit must be between 1 and {MAX_TASK_LIMIT}, got {limit}"
                )));
            }
            self.limit = limit;
        }
        Ok(self)
    }
}

/// Aggregate counts for one user's tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: u32,
    pub completed: u32,
    pub high_priority: u32,
    pub overdue: u32,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn save(&self, task: &Task) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;
    async fn delete(&self, id: &TaskId) -> Result<(), DomainError>;
    async fn list(&self, user_id: &UserId, filter: &TaskFilter) -> Result<Vec<Task>, DomainError>;
    /// Not completed and due strictly before `now`.
    async fn list_overdue(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError>;
    async fn list_incomplete(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError>;
    async fn counts(&self, user_id: &UserId, now: DateTime<Utc>) -> Result<TaskCounts, DomainError>;
    /// Half-open `[start, end)`.
    async fn count_created_between(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u32, DomainError>;
    /// Half-open `[start, end)`.
    async fn count_completed_between(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u32, DomainError>;
}
