use super::helpers::{habit_completions, mood_logs, task_window};
use super::AnalyticsQueries;
use crate::application::context::UserContext;
use crate::application::dtos::{MonthlyTrendDto, MonthlyTrendsDto};
use mindgarden_domain::analytics::{completion_rate, months_back, round2, MoodStats};
use mindgarden_domain::shared::DomainError;

const DEFAULT_MONTHS: u32 = 3;
const MAX_MONTHS: u32 = 12;

pub(super) async fn build(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    months: Option<u32>,
) -> Result<MonthlyTrendsDto, DomainError> {
    let months = months.unwrap_or(DEFAULT_MONTHS);
    if months == 0 || months > MAX_MONTHS {
        return Err(DomainError::Validation(format!(
            "months must be between 1 and {MAX_MONTHS}, got {months}"
        )));
    }

    let today = ctx.today(queries.clock.as_ref());
    let mut trends = Vec::with_capacity(months as usize);
    for month in months_back(today, months) {
        let completions = habit_completions(queries, ctx, month).await?;
        let window = task_window(queries, ctx, month).await?;
        let stats = MoodStats::from_logs(&mood_logs(queries, ctx, month).await?).rounded();

        trends.push(MonthlyTrendDto {
            month: month.start.format("%Y-%m").to_string(),
            month_name: month.start.format("%B %Y").to_string(),
            habit_completions: completions,
            tasks_completed: window.completed,
            total_tasks: window.created,
            task_completion_rate: round2(completion_rate(window.completed, window.created)),
            mood_logs: stats.count,
            average_mood: stats.average_mood,
            average_energy: stats.average_energy,
        });
    }

    Ok(MonthlyTrendsDto {
        trends,
        period: format!("Last {months} months"),
    })
}
