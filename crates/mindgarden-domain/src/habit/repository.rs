use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Habit, HabitCompletion};
use crate::shared::{DomainError, HabitId, UserId};
use crate::streak::RawDate;

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;
    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError>;
    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError>;
    /// Removes the habit and every completion recorded for it.
    async fn delete(&self, id: &HabitId) -> Result<(), DomainError>;
}

/// Completion rows are read back as `RawDate` so that legacy encodings pass
/// through the ingestion boundary before any streak is computed.
#[async_trait]
pub trait HabitCompletionRepository: Send + Sync {
    /// Fails with `Conflict` when the habit already has a completion on that date.
    async fn insert(&self, completion: &HabitCompletion) -> Result<(), DomainError>;
    async fn exists_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError>;
    /// Returns whether a row was removed.
    async fn delete_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError>;
    async fn raw_dates_for_habit(&self, habit_id: &HabitId) -> Result<Vec<RawDate>, DomainError>;
    async fn raw_dates_for_user(&self, user_id: &UserId) -> Result<Vec<RawDate>, DomainError>;
    async fn count_for_habit(&self, habit_id: &HabitId) -> Result<u32, DomainError>;
    /// Inclusive on both ends.
    async fn count_for_habit_between(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32, DomainError>;
    /// Inclusive on both ends.
    async fn count_for_user_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32, DomainError>;
}
