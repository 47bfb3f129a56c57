use std::collections::{BTreeMap, HashMap};

use super::helpers::{mood_logs, task_window};
use super::AnalyticsQueries;
use crate::application::context::UserContext;
use crate::application::dtos::{
    DailyMoodPointDto, HabitPerformanceDto, MoodDayDto, WeekPeriodDto, WeeklyHabitsDto,
    WeeklyMoodDto, WeeklyReportDto, WeeklyTasksDto,
};
use crate::application::utils::format_date;
use mindgarden_domain::analytics::{completion_rate, round2, week_of, MoodStats};
use mindgarden_domain::shared::DomainError;

const DAYS_PER_WEEK: u32 = 7;

pub(super) async fn build(
    queries: &AnalyticsQueries,
    ctx: &UserContext,
) -> Result<WeeklyReportDto, DomainError> {
    let week = week_of(ctx.today(queries.clock.as_ref()));

    let active = queries.habit_repo.find_active_by_user(&ctx.user_id).await?;
    let mut performance = Vec::with_capacity(active.len());
    for habit in &active {
        let completions = queries
            .completion_repo
            .count_for_habit_between(habit.id(), week.start, week.end)
            .await?;
        let target = habit.weekly_target();
        performance.push(HabitPerformanceDto {
            habit_name: habit.name().to_string(),
            completions,
            target,
            completion_rate: round2(completion_rate(completions, target)),
        });
    }

    let window = task_window(queries, ctx, week).await?;

    let logs = mood_logs(queries, ctx, week).await?;
    let by_date: HashMap<_, _> = logs.iter().map(|log| (log.date(), log)).collect();
    let mut by_day = BTreeMap::new();
    let mut daily_data = Vec::new();
    for date in week.days() {
        let log = by_date.get(&date);
        by_day.insert(
            date.format("%A").to_string(),
            MoodDayDto {
                date: format_date(date),
                mood: log.map(|l| l.mood().to_string()),
                energy: log.map(|l| l.energy().value()),
                logged: log.is_some(),
            },
        );
        if let Some(log) = log {
            daily_data.push(DailyMoodPointDto {
                day: date.format("%a").to_string(),
                mood: log.mood().score(),
                energy: log.energy().value(),
            });
        }
    }
    let stats = MoodStats::from_logs(&logs).rounded();

    Ok(WeeklyReportDto {
        week_period: WeekPeriodDto {
            start: format_date(week.start),
            end: format_date(week.end),
            current_week: true,
        },
        habits: WeeklyHabitsDto {
            total_habits: active.len() as u32,
            performance,
        },
        tasks: WeeklyTasksDto {
            created: window.created,
            completed: window.completed,
            completion_rate: round2(completion_rate(window.completed, window.created)),
        },
        mood: WeeklyMoodDto {
            by_day,
            days_logged: stats.count,
            consistency: round2(completion_rate(stats.count, DAYS_PER_WEEK)),
        },
        mood_stability: stats.stability,
        average_mood: stats.average_mood,
        average_energy: stats.average_energy,
        mood_variance: stats.variance,
        daily_data,
    })
}
