use log::debug;

use super::helpers::{habit_completions, mood_logs, task_window};
use super::AnalyticsQueries;
use crate::application::context::UserContext;
use crate::application::dtos::{
    DashboardDto, HabitSummaryDto, MoodSummaryDto, PeriodDto, TaskSummaryDto,
};
use crate::application::utils::{format_date, validate_days};
use mindgarden_domain::analytics::{
    completion_rate, dashboard_insights, round2, trailing_days, DashboardSignals, GardenHealth,
    MoodStats,
};
use mindgarden_domain::shared::DomainError;

pub(super) async fn build(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    days: Option<u32>,
) -> Result<DashboardDto, DomainError> {
    let days = validate_days(days, 30, 7, 365)?;
    let today = ctx.today(queries.clock.as_ref());
    let range = trailing_days(today, days);

    // Habits
    let active = queries.habit_repo.find_active_by_user(&ctx.user_id).await?;
    let completions = habit_completions(queries, ctx, range).await?;
    let mut total_current_streak = 0;
    let mut longest_streak = 0;
    for habit in &active {
        let streak = queries.streaks.habit_streaks(habit.id(), today).await?;
        total_current_streak += streak.current_streak;
        longest_streak = longest_streak.max(streak.longest_streak);
    }
    let habit_rate = completion_rate(completions, active.len() as u32 * days);

    // Tasks
    let window = task_window(queries, ctx, range).await?;
    let overdue = queries
        .task_repo
        .counts(&ctx.user_id, queries.clock.now())
        .await?
        .overdue;
    let task_rate = completion_rate(window.completed, window.created);

    // Mood
    let logs = mood_logs(queries, ctx, range).await?;
    let stats = MoodStats::from_logs(&logs);
    let consistency = completion_rate(stats.count, days);

    let insights = dashboard_insights(&DashboardSignals {
        habit_rate,
        task_rate,
        overdue_tasks: overdue,
        average_mood: stats.average_mood,
        mood_logs: stats.count,
        days,
    });
    let garden_health = GardenHealth::evaluate(habit_rate, task_rate, stats.average_mood);

    debug!(
        "[analytics] dashboard user_id={} days={} garden_score={}",
        ctx.user_id, days, garden_health.overall_score
    );

    Ok(DashboardDto {
        period: PeriodDto {
            start_date: format_date(range.start),
            end_date: format_date(range.end),
            days,
        },
        habits: HabitSummaryDto {
            total_active: active.len() as u32,
            completions,
            completion_rate: round2(habit_rate),
            total_current_streak,
            longest_streak,
        },
        tasks: TaskSummaryDto {
            total_created: window.created,
            completed: window.completed,
            overdue,
            completion_rate: round2(task_rate),
        },
        mood: MoodSummaryDto {
            logs_count: stats.count,
            average_mood: round2(stats.average_mood),
            average_energy: round2(stats.average_energy),
            logging_consistency: round2(consistency),
        },
        insights,
        garden_health,
    })
}
