use log::debug;
use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::{HabitDto, HabitStreakDto, WeeklyStatDto};
use crate::application::services::{owned_habit, StreakReader};
use mindgarden_domain::analytics::trailing_days;
use mindgarden_domain::habit::{HabitCompletionRepository, HabitRepository};
use mindgarden_domain::shared::{Clock, DomainError};

pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn HabitCompletionRepository>,
    streaks: Arc<StreakReader>,
    clock: Arc<dyn Clock>,
}

impl HabitQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn HabitCompletionRepository>,
        streaks: Arc<StreakReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            streaks,
            clock,
        }
    }

    /// Every habit the user owns, active or not, with its current figures.
    pub async fn list(&self, ctx: &UserContext) -> Result<Vec<HabitDto>, DomainError> {
        let today = ctx.today(self.clock.as_ref());
        let habits = self.habit_repo.find_by_user(&ctx.user_id).await?;

        let mut dtos = Vec::with_capacity(habits.len());
        for habit in &habits {
            let progress = self.streaks.habit_progress(habit.id(), today).await?;
            dtos.push(HabitDto::new(habit, progress));
        }

        debug!(
            "[habit] listed user_id={} count={} today={}",
            ctx.user_id,
            dtos.len(),
            today
        );
        Ok(dtos)
    }

    pub async fn get(&self, ctx: &UserContext, habit_id: &str) -> Result<HabitDto, DomainError> {
        let habit = owned_habit(self.habit_repo.as_ref(), habit_id, &ctx.user_id).await?;
        let today = ctx.today(self.clock.as_ref());
        let progress = self.streaks.habit_progress(habit.id(), today).await?;
        Ok(HabitDto::new(&habit, progress))
    }

    pub async fn streak(
        &self,
        ctx: &UserContext,
        habit_id: &str,
    ) -> Result<HabitStreakDto, DomainError> {
        let habit = owned_habit(self.habit_repo.as_ref(), habit_id, &ctx.user_id).await?;
        let today = ctx.today(self.clock.as_ref());
        let summary = self.streaks.habit_summary(habit.id(), today).await?;
        Ok(HabitStreakDto::new(&habit, &summary))
    }

    /// The last seven days, oldest first. `total` counts active habits scheduled that weekday.
    pub async fn weekly_stats(
        &self,
        ctx: &UserContext,
    ) -> Result<Vec<WeeklyStatDto>, DomainError> {
        let today = ctx.today(self.clock.as_ref());
        let active = self.habit_repo.find_active_by_user(&ctx.user_id).await?;

        let mut stats = Vec::with_capacity(7);
        for date in trailing_days(today, 7).days() {
            let completed = self
                .completion_repo
                .count_for_user_between(&ctx.user_id, date, date)
                .await?;
            let total = active.iter().filter(|h| h.is_scheduled_on(date)).count() as u32;
            stats.push(WeeklyStatDto::new(date, completed, total));
        }

        Ok(stats)
    }
}
