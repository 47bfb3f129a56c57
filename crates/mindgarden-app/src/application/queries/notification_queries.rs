use chrono::Days;
use log::debug;
use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::{
    NotificationPreferencesDto, PendingHabitDto, PendingNotificationsDto, PendingTaskDto,
    SnoozeStatusDto,
};
use crate::application::services::StreakReader;
use crate::application::utils::format_timestamp;
use mindgarden_domain::habit::HabitRepository;
use mindgarden_domain::notification::{NotificationPreferences, NotificationRepository};
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::streak::compute_streaks;
use mindgarden_domain::task::TaskRepository;

const DEFAULT_CATEGORY: &str = "General";

pub struct NotificationQueries {
    notification_repo: Arc<dyn NotificationRepository>,
    habit_repo: Arc<dyn HabitRepository>,
    task_repo: Arc<dyn TaskRepository>,
    streaks: Arc<StreakReader>,
    clock: Arc<dyn Clock>,
}

impl NotificationQueries {
    pub fn new(
        notification_repo: Arc<dyn NotificationRepository>,
        habit_repo: Arc<dyn HabitRepository>,
        task_repo: Arc<dyn TaskRepository>,
        streaks: Arc<StreakReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            notification_repo,
            habit_repo,
            task_repo,
            streaks,
            clock,
        }
    }

    async fn load_preferences(
        &self,
        ctx: &UserContext,
    ) -> Result<NotificationPreferences, DomainError> {
        Ok(self
            .notification_repo
            .find_preferences(&ctx.user_id)
            .await?
            .unwrap_or_else(|| NotificationPreferences::defaults_for(ctx.user_id.clone())))
    }

    /// Saved preferences, or the defaults for a user who never saved any.
    pub async fn preferences(
        &self,
        ctx: &UserContext,
    ) -> Result<NotificationPreferencesDto, DomainError> {
        let prefs = self.load_preferences(ctx).await?;
        Ok(NotificationPreferencesDto::from(&prefs))
    }

    /// Habits still open today and tasks due by tomorrow. A reminder kind the user
    /// switched off contributes nothing.
    pub async fn pending(
        &self,
        ctx: &UserContext,
    ) -> Result<PendingNotificationsDto, DomainError> {
        let prefs = self.load_preferences(ctx).await?;
        let today = ctx.today(self.clock.as_ref());
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

        let mut habits = Vec::new();
        if prefs.habits_enabled() {
            for habit in self.habit_repo.find_active_by_user(&ctx.user_id).await? {
                if !habit.is_scheduled_on(today) {
                    continue;
                }
                let dates = self.streaks.habit_dates(habit.id()).await?;
                if dates.contains(&today) {
                    continue;
                }
                let streak = compute_streaks(dates, today);
                habits.push(PendingHabitDto {
                    id: habit.id().as_str().to_string(),
                    name: habit.name().to_string(),
                    category: habit.category().unwrap_or(DEFAULT_CATEGORY).to_string(),
                    streak: streak.current_streak,
                });
            }
        }

        let mut tasks = Vec::new();
        if prefs.tasks_enabled() {
            for task in self.task_repo.list_incomplete(&ctx.user_id).await? {
                let due_day = task.due_date().map(|due| ctx.timezone.date_of(due));
                if due_day.is_some_and(|day| day > tomorrow) {
                    continue;
                }
                tasks.push(PendingTaskDto {
                    id: task.id().as_str().to_string(),
                    title: task.title().to_string(),
                    priority: task.priority().to_string(),
                    due_date: task.due_date().map(format_timestamp),
                    is_overdue: due_day.is_some_and(|day| day < today),
                    category: task.category().map(str::to_string),
                });
            }
        }

        debug!(
            "[notification] pending user_id={} habits={} tasks={}",
            ctx.user_id,
            habits.len(),
            tasks.len()
        );

        Ok(PendingNotificationsDto {
            total_count: (habits.len() + tasks.len()) as u32,
            habits,
            tasks,
        })
    }

    pub async fn check_snooze(
        &self,
        ctx: &UserContext,
        notification_id: &str,
    ) -> Result<SnoozeStatusDto, DomainError> {
        let now = self.clock.now();
        let snooze = self
            .notification_repo
            .find_active_snooze(&ctx.user_id, notification_id, now)
            .await?;

        Ok(match snooze {
            Some(snooze) if snooze.is_active(now) => SnoozeStatusDto {
                is_snoozed: true,
                snooze_until: Some(format_timestamp(snooze.snooze_until())),
                minutes_remaining: Some(snooze.minutes_remaining(now)),
            },
            _ => SnoozeStatusDto {
                is_snoozed: false,
                snooze_until: None,
                minutes_remaining: None,
            },
        })
    }
}
