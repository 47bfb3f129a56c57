use chrono::NaiveDate;

use super::AnalyticsQueries;
use crate::application::context::UserContext;
use mindgarden_domain::analytics::DateRange;
use mindgarden_domain::mood::MoodLog;
use mindgarden_domain::shared::DomainError;

/// Tasks created and completed during the user's local days `range`.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TaskWindow {
    pub created: u32,
    pub completed: u32,
}

pub(super) async fn task_window(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    range: DateRange,
) -> Result<TaskWindow, DomainError> {
    let (start, end) = ctx.timezone.utc_window(range.start, range.end);
    let created = queries
        .task_repo
        .count_created_between(&ctx.user_id, start, end)
        .await?;
    let completed = queries
        .task_repo
        .count_completed_between(&ctx.user_id, start, end)
        .await?;
    Ok(TaskWindow { created, completed })
}

pub(super) async fn habit_completions(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    range: DateRange,
) -> Result<u32, DomainError> {
    queries
        .completion_repo
        .count_for_user_between(&ctx.user_id, range.start, range.end)
        .await
}

pub(super) async fn mood_logs(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    range: DateRange,
) -> Result<Vec<MoodLog>, DomainError> {
    queries
        .mood_repo
        .list_between(&ctx.user_id, range.start, range.end)
        .await
}

pub(super) fn single_day(date: NaiveDate) -> DateRange {
    DateRange::new(date, date)
}
