use async_trait::async_trait;
use chrono::NaiveDate;

use super::MoodLog;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait MoodLogRepository: Send + Sync {
    /// Inserts, or replaces the log the user already has for that date.
    async fn upsert(&self, log: &MoodLog) -> Result<MoodLog, DomainError>;
    async fn find_on(&self, user_id: &UserId, date: NaiveDate)
        -> Result<Option<MoodLog>, DomainError>;
    /// Inclusive range, oldest first.
    async fn list_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoodLog>, DomainError>;
    /// Returns whether a log was removed.
    async fn delete_on(&self, user_id: &UserId, date: NaiveDate) -> Result<bool, DomainError>;
}
