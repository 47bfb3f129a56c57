use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TaskPriority, TaskStatus};
use crate::shared::{DomainError, TaskId, UserId};

pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    estimated_minutes: u32,
    priority: TaskPriority,
    category: Option<String>,
    effort_type: Option<String>,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when a task is created.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub estimated_minutes: Option<u32>,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub effort_type: Option<String>,
}

impl Task {
    pub fn new(user_id: UserId, draft: TaskDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let title = validate_title(&draft.title)?;
        let estimated_minutes =
            validate_estimate(draft.estimated_minutes.unwrap_or(DEFAULT_ESTIMATED_MINUTES))?;

        Ok(Self {
            id: TaskId::new(),
            user_id,
            title,
            description: draft.description,
            due_date: draft.due_date,
            estimated_minutes,
            priority: draft.priority.unwrap_or_default(),
            category: draft.category,
            effort_type: draft.effort_type,
            status: TaskStatus::Pending,
            completed_at: None,
            created_at: now,
            updated_at: None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TaskId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        estimated_minutes: u32,
        priority: TaskPriority,
        category: Option<String>,
        effort_type: Option<String>,
        status: TaskStatus,
        completed_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            due_date,
            estimated_minutes,
            priority,
            category,
            effort_type,
            status,
            completed_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn effort_type(&self) -> Option<&str> {
        self.effort_type.as_deref()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < now)
    }

    /// Moves to `status`, keeping `completed_at` in step with it.
    pub fn transition(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        if status.is_completed() {
            if !self.is_completed() {
                self.completed_at = Some(now);
            }
        } else {
            self.completed_at = None;
        }
        self.status = status;
        self.updated_at = Some(now);
    }

    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.transition(TaskStatus::Completed, now);
    }

    pub fn reopen(&mut self, now: DateTime<Utc>) {
        self.transition(TaskStatus::Pending, now);
    }

    pub fn retitle(&mut self, title: String, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.title = validate_title(&title)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn describe(&mut self, description: Option<String>, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = Some(now);
    }

    pub fn reschedule(&mut self, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.due_date = due_date;
        self.updated_at = Some(now);
    }

    pub fn estimate(&mut self, minutes: u32, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.estimated_minutes = validate_estimate(minutes)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn prioritize(&mut self, priority: TaskPriority, now: DateTime<Utc>) {
        self.priority = priority;
        self.updated_at = Some(now);
    }

    pub fn categorize(&mut self, category: Option<String>, now: DateTime<Utc>) {
        self.category = category;
        self.updated_at = Some(now);
    }

    pub fn set_effort_type(&mut self, effort_type: Option<String>, now: DateTime<Utc>) {
        self.effort_type = effort_type;
        self.updated_at = Some(now);
    }
}

fn validate_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation(
            "Task title cannot be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}

fn validate_estimate(minutes: u32) -> Result<u32, DomainError> {
    if minutes == 0 {
        return Err(DomainError::Validation(
            "estimated_minutes must be greater than zero".to_string(),
        ));
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(UserId::new(), draft("Write report"), Utc::now()).unwrap();

        assert_eq!(task.status(), TaskStatus::Pending);
        assert_eq!(task.priority(), TaskPriority::Medium);
        assert_eq!(task.estimated_minutes(), DEFAULT_ESTIMATED_MINUTES);
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn test_new_task_validation() {
        assert!(Task::new(UserId::new(), draft("  "), Utc::now()).is_err());

        let zero = TaskDraft {
            title: "x".into(),
            estimated_minutes: Some(0),
            ..Default::default()
        };
        assert!(Task::new(UserId::new(), zero, Utc::now()).is_err());
    }

    #[test]
    fn test_complete_stamps_and_reopen_clears() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let mut task = Task::new(UserId::new(), draft("x"), now).unwrap();

        task.complete(now);
        assert!(task.is_completed());
        assert_eq!(task.completed_at(), Some(now));

        // Completing again keeps the first stamp.
        task.complete(now + Duration::hours(1));
        assert_eq!(task.completed_at(), Some(now));

        task.reopen(now);
        assert_eq!(task.status(), TaskStatus::Pending);
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn test_transition_to_cancelled_clears_completion() {
        let now = Utc::now();
        let mut task = Task::new(UserId::new(), draft("x"), now).unwrap();
        task.complete(now);
        task.transition(TaskStatus::Cancelled, now);
        assert!(task.completed_at().is_none());
        assert_eq!(task.status(), TaskStatus::Cancelled);
    }

    #[test]
    fn test_overdue_clears_on_completion() {
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let mut task = Task::new(
            UserId::new(),
            TaskDraft {
                title: "x".into(),
                due_date: Some(now - Duration::hours(2)),
                ..Default::default()
            },
            now,
        )
        .unwrap();

        assert!(task.is_overdue(now));

        task.complete(now);
        assert!(!task.is_overdue(now));
    }
}
