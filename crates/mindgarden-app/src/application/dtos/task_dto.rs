use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::utils::format_timestamp;
use mindgarden_domain::analytics::{completion_rate, round2};
use mindgarden_domain::task::{Task, TaskCounts};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub estimated_minutes: u32,
    pub priority: String,
    pub category: Option<String>,
    pub effort_type: Option<String>,
    pub status: String,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub is_overdue: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl TaskDto {
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id().as_str().to_string(),
            title: task.title().to_string(),
            description: task.description().map(str::to_string),
            due_date: task.due_date().map(format_timestamp),
            estimated_minutes: task.estimated_minutes(),
            priority: task.priority().to_string(),
            category: task.category().map(str::to_string),
            effort_type: task.effort_type().map(str::to_string),
            status: task.status().to_string(),
            completed: task.is_completed(),
            completed_at: task.completed_at().map(format_timestamp),
            is_overdue: task.is_overdue(now),
            created_at: format_timestamp(task.created_at()),
            updated_at: task.updated_at().map(format_timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    #[serde(alias = "estimated_duration")]
    pub estimated_minutes: Option<u32>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub effort_type: Option<String>,
}

/// Partial update. An empty `due_date` string clears the due date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    #[serde(alias = "estimated_duration")]
    pub estimated_minutes: Option<u32>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub effort_type: Option<String>,
    pub status: Option<String>,
}

/// Listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskListParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOverviewDto {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub high_priority: u32,
    pub overdue_tasks: u32,
    pub completion_rate: f64,
}

impl From<TaskCounts> for TaskOverviewDto {
    fn from(counts: TaskCounts) -> Self {
        Self {
            total_tasks: counts.total,
            completed_tasks: counts.completed,
            pending_tasks: counts.total.saturating_sub(counts.completed),
            high_priority: counts.high_priority,
            overdue_tasks: counts.overdue,
            completion_rate: round2(completion_rate(counts.completed, counts.total)),
        }
    }
}
