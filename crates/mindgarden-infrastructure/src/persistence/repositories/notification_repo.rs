use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::rows::enum_from_db;
use crate::persistence::SqliteRepositoryBase;
use mindgarden_domain::notification::{
    NotificationPreferences, NotificationRepository, NotificationSnooze,
};
use mindgarden_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct PreferencesRow {
    user_id: String,
    habits_enabled: bool,
    tasks_enabled: bool,
    habits_time: String,
    tasks_time: String,
    snooze_minutes: i64,
}

impl PreferencesRow {
    fn try_into_preferences(self) -> Result<NotificationPreferences, DomainError> {
        let snooze_minutes = u32::try_from(self.snooze_minutes).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid notification_preferences.snooze_minutes: {}",
                self.snooze_minutes
            ))
        })?;

        NotificationPreferences::new(
            UserId::from_string(&self.user_id),
            self.habits_enabled,
            self.tasks_enabled,
            enum_from_db(&self.habits_time, "notification_preferences.habits_time")?,
            enum_from_db(&self.tasks_time, "notification_preferences.tasks_time")?,
            snooze_minutes,
        )
        .map_err(|e| DomainError::DataIntegrity(e.message().to_string()))
    }
}

#[derive(FromRow)]
struct SnoozeRow {
    user_id: String,
    notification_id: String,
    snoozed_at: DateTime<Utc>,
    snooze_until: DateTime<Utc>,
}

impl SnoozeRow {
    fn into_snooze(self) -> NotificationSnooze {
        NotificationSnooze::restore(
            UserId::from_string(&self.user_id),
            self.notification_id,
            self.snoozed_at,
            self.snooze_until,
        )
    }
}

pub struct SqliteNotificationRepository {
    base: SqliteRepositoryBase,
}

impl SqliteNotificationRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl NotificationRepository for SqliteNotificationRepository {
    async fn find_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, DomainError> {
        let query = r#"
            SELECT user_id, habits_enabled, tasks_enabled, habits_time, tasks_time, snooze_minutes
            FROM notification_preferences
            WHERE user_id = ?1
        "#;

        let row: Option<PreferencesRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find notification preferences",
            )
            .await?;

        row.map(PreferencesRow::try_into_preferences).transpose()
    }

    async fn save_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO notification_preferences (
                user_id,
                habits_enabled,
                tasks_enabled,
                habits_time,
                tasks_time,
                snooze_minutes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(user_id) DO UPDATE SET
                habits_enabled = excluded.habits_enabled,
                tasks_enabled = excluded.tasks_enabled,
                habits_time = excluded.habits_time,
                tasks_time = excluded.tasks_time,
                snooze_minutes = excluded.snooze_minutes
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(preferences.user_id().as_str())
                    .bind(preferences.habits_enabled())
                    .bind(preferences.tasks_enabled())
                    .bind(preferences.habits_time().to_string())
                    .bind(preferences.tasks_time().to_string())
                    .bind(i64::from(preferences.snooze_minutes())),
                "Save notification preferences",
            )
            .await?;

        Ok(())
    }

    async fn save_snooze(&self, snooze: &NotificationSnooze) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO notification_snoozes (user_id, notification_id, snoozed_at, snooze_until)
            VALUES (?1, ?2, ?3, ?4)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(snooze.user_id().as_str())
                    .bind(snooze.notification_id())
                    .bind(snooze.snoozed_at())
                    .bind(snooze.snooze_until()),
                "Save notification snooze",
            )
            .await?;

        Ok(())
    }

    async fn find_active_snooze(
        &self,
        user_id: &UserId,
        notification_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<NotificationSnooze>, DomainError> {
        let query = r#"
            SELECT user_id, notification_id, snoozed_at, snooze_until
            FROM notification_snoozes
            WHERE user_id = ?1 AND notification_id = ?2 AND snooze_until > ?3
            ORDER BY snooze_until DESC
            LIMIT 1
        "#;

        let row: Option<SnoozeRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(notification_id)
                    .bind(now),
                "Find active snooze",
            )
            .await?;

        Ok(row.map(SnoozeRow::into_snooze))
    }
}
