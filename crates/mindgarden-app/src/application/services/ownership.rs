use mindgarden_domain::habit::{Habit, HabitRepository};
use mindgarden_domain::shared::{DomainError, HabitId, TaskId, UserId};
use mindgarden_domain::task::{Task, TaskRepository};

/// Load a habit the caller owns. A habit that belongs to someone else reads as missing.
pub async fn owned_habit(
    repo: &dyn HabitRepository,
    habit_id: &str,
    user_id: &UserId,
) -> Result<Habit, DomainError> {
    repo.find_by_id(&HabitId::from_string(habit_id))
        .await?
        .filter(|habit| habit.is_owned_by(user_id))
        .ok_or_else(|| DomainError::NotFound(format!("Habit {habit_id} not found")))
}

pub async fn owned_task(
    repo: &dyn TaskRepository,
    task_id: &str,
    user_id: &UserId,
) -> Result<Task, DomainError> {
    repo.find_by_id(&TaskId::from_string(task_id))
        .await?
        .filter(|task| task.is_owned_by(user_id))
        .ok_or_else(|| DomainError::NotFound(format!("Task {task_id} not found")))
}
