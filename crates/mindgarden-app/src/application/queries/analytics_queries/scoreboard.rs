use chrono::Days;
use log::debug;

use super::helpers::{habit_completions, mood_logs, single_day, task_window};
use super::AnalyticsQueries;
use crate::application::context::UserContext;
use crate::application::dtos::{
    ActivityChangeDto, DailyActivityDto, ScoreboardDto, WeekActivityDto,
};
use crate::application::utils::format_date;
use mindgarden_domain::analytics::{
    activity_score, percentage_change, round2, week_of, DateRange, MoodStats, Rank,
};
use mindgarden_domain::shared::DomainError;

async fn week_activity(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
    week: DateRange,
) -> Result<WeekActivityDto, DomainError> {
    let habits = habit_completions(queries, ctx, week).await?;
    let tasks = task_window(queries, ctx, week).await?.completed;
    let stats = MoodStats::from_logs(&mood_logs(queries, ctx, week).await?);

    Ok(WeekActivityDto {
        habits,
        tasks,
        moods: stats.count,
        avg_mood: round2(stats.average_mood),
    })
}

pub(super) async fn build(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
) -> Result<ScoreboardDto, DomainError> {
    let today = ctx.today(queries.clock.as_ref());
    let this_week_range = week_of(today);
    let last_week_range = week_of(today.checked_sub_days(Days::new(7)).unwrap_or(today));

    let streak = queries.streaks.user_streaks(&ctx.user_id, today).await?;
    let this_week = week_activity(queries, ctx, this_week_range).await?;
    let last_week = week_activity(queries, ctx, last_week_range).await?;

    let overall_score = round2(activity_score(
        this_week.habits,
        this_week.tasks,
        this_week.avg_mood,
    ));
    let rank = Rank::from_score(overall_score);

    let changes = ActivityChangeDto {
        habits: round2(percentage_change(
            f64::from(this_week.habits),
            f64::from(last_week.habits),
        )),
        tasks: round2(percentage_change(
            f64::from(this_week.tasks),
            f64::from(last_week.tasks),
        )),
        moods: round2(percentage_change(
            f64::from(this_week.moods),
            f64::from(last_week.moods),
        )),
    };

    let logged: Vec<_> = mood_logs(queries, ctx, this_week_range)
        .await?
        .iter()
        .map(|log| log.date())
        .collect();
    let mut daily_breakdown = Vec::with_capacity(7);
    for date in this_week_range.days() {
        let habits = habit_completions(queries, ctx, single_day(date)).await?;
        let tasks = task_window(queries, ctx, single_day(date)).await?.completed;
        let moods = u32::from(logged.contains(&date));
        daily_breakdown.push(DailyActivityDto {
            date: format_date(date),
            day: date.format("%A").to_string(),
            habits,
            tasks,
            moods,
            total: habits + tasks + moods,
        });
    }

    debug!(
        "[analytics] scoreboard user_id={} score={} rank={}",
        ctx.user_id,
        overall_score,
        rank.label()
    );

    Ok(ScoreboardDto {
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        overall_score,
        rank: rank.label().to_string(),
        rank_emoji: rank.emoji().to_string(),
        this_week,
        last_week,
        changes,
        daily_breakdown,
    })
}
