use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{NotificationPreferences, NotificationSnooze};
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// `None` when the user never saved preferences.
    async fn find_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, DomainError>;

    async fn save_preferences(&self, preferences: &NotificationPreferences)
        -> Result<(), DomainError>;

    async fn save_snooze(&self, snooze: &NotificationSnooze) -> Result<(), DomainError>;

    /// Latest snooze for the notification that is still running at `now`.
    async fn find_active_snooze(
        &self,
        user_id: &UserId,
        notification_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<NotificationSnooze>, DomainError>;
}
