use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::{DashboardDto, MonthlyTrendsDto, ScoreboardDto, WeeklyReportDto};
use crate::application::services::StreakReader;
use mindgarden_domain::habit::{HabitCompletionRepository, HabitRepository};
use mindgarden_domain::mood::MoodLogRepository;
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::task::TaskRepository;

mod dashboard;
mod helpers;
mod monthly_trends;
mod scoreboard;
mod weekly_report;


/// Read-only reports across habits, tasks and mood. Day windows are the user's local days.
pub struct AnalyticsQueries {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn HabitCompletionRepository>,
    task_repo: Arc<dyn TaskRepository>,
    mood_repo: Arc<dyn MoodLogRepository>,
    streaks: Arc<StreakReader>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn HabitCompletionRepository>,
        task_repo: Arc<dyn TaskRepository>,
        mood_repo: Arc<dyn MoodLogRepository>,
        streaks: Arc<StreakReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            task_repo,
            mood_repo,
            streaks,
            clock,
        }
    }

    /// Overview of the trailing `days` (7..=365, default 30).
    pub async fn dashboard(
        &self,
        ctx: &UserContext,
        days: Option<u32>,
    ) -> Result<DashboardDto, DomainError> {
        dashboard::build(self, ctx, days).await
    }

    /// Monday through Sunday of the current week.
    pub async fn weekly_report(&self, ctx: &UserContext) -> Result<WeeklyReportDto, DomainError> {
        weekly_report::build(self, ctx).await
    }

    /// Calendar months ending with the current one (1..=12, default 3), oldest first.
    pub async fn monthly_trends(
        &self,
        ctx: &UserContext,
        months: Option<u32>,
    ) -> Result<MonthlyTrendsDto, DomainError> {
        monthly_trends::build(self, ctx, months).await
    }

    pub async fn scoreboard(&self, ctx: &UserContext) -> Result<ScoreboardDto, DomainError> {
        scoreboard::build(self, ctx).await
    }
}
