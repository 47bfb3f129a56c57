use chrono::{Days, NaiveDate};
use log::warn;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::dtos::HabitProgress;
use mindgarden_domain::habit::HabitCompletionRepository;
use mindgarden_domain::shared::{DomainError, HabitId, UserId};
use mindgarden_domain::streak::{
    compute_streak_summary, compute_streaks, normalize_dates_lossy, RawDate, StreakResult,
    StreakSummary,
};

/// Reads completion history through the ingestion boundary and hands it to the streak
/// calculator. Every streak the service reports comes from here.
pub struct StreakReader {
    completions: Arc<dyn HabitCompletionRepository>,
}

impl StreakReader {
    pub fn new(completions: Arc<dyn HabitCompletionRepository>) -> Self {
        Self { completions }
    }

    pub async fn habit_dates(
        &self,
        habit_id: &HabitId,
    ) -> Result<BTreeSet<NaiveDate>, DomainError> {
        let raws = self.completions.raw_dates_for_habit(habit_id).await?;
        Ok(normalize_logged(raws, "habit_id", habit_id.as_str()))
    }

    /// Union of completion days across all of the user's habits.
    pub async fn user_dates(&self, user_id: &UserId) -> Result<BTreeSet<NaiveDate>, DomainError> {
        let raws = self.completions.raw_dates_for_user(user_id).await?;
        Ok(normalize_logged(raws, "user_id", user_id.as_str()))
    }

    pub async fn habit_streaks(
        &self,
        habit_id: &HabitId,
        today: NaiveDate,
    ) -> Result<StreakResult, DomainError> {
        let dates = self.habit_dates(habit_id).await?;
        Ok(compute_streaks(dates, today))
    }

    pub async fn habit_summary(
        &self,
        habit_id: &HabitId,
        today: NaiveDate,
    ) -> Result<StreakSummary, DomainError> {
        let dates = self.habit_dates(habit_id).await?;
        Ok(compute_streak_summary(dates, today))
    }

    /// Streak summary plus today's status and the trailing week count `[today-7, today]`.
    pub async fn habit_progress(
        &self,
        habit_id: &HabitId,
        today: NaiveDate,
    ) -> Result<HabitProgress, DomainError> {
        let dates = self.habit_dates(habit_id).await?;
        let week_start = today.checked_sub_days(Days::new(7)).unwrap_or(today);

        Ok(HabitProgress {
            completed_today: dates.contains(&today),
            completions_this_week: dates.range(week_start..=today).count() as u32,
            summary: compute_streak_summary(dates, today),
        })
    }

    pub async fn user_streaks(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<StreakResult, DomainError> {
        let dates = self.user_dates(user_id).await?;
        Ok(compute_streaks(dates, today))
    }
}

fn normalize_logged(raws: Vec<RawDate>, scope: &str, id: &str) -> BTreeSet<NaiveDate> {
    let (dates, rejected) = normalize_dates_lossy(raws);
    for reason in rejected {
        warn!("[streak] skip invalid date row {}={} reason={}", scope, id, reason);
    }
    dates
}
