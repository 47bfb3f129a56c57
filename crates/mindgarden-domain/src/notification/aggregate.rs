use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ReminderTime;
use crate::shared::{DomainError, UserId};

pub const DEFAULT_SNOOZE_MINUTES: u32 = 30;
pub const MAX_SNOOZE_MINUTES: u32 = 1440;

fn validate_snooze_minutes(minutes: u32) -> Result<u32, DomainError> {
    if minutes == 0 || minutes > MAX_SNOOZE_MINUTES {
        return Err(DomainError::Validation(format!(
            "Snooze must be between 1 and {MAX_SNOOZE_MINUTES} minutes, got {minutes}"
        )));
    }
    Ok(minutes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    user_id: UserId,
    habits_enabled: bool,
    tasks_enabled: bool,
    habits_time: ReminderTime,
    tasks_time: ReminderTime,
    snooze_minutes: u32,
}

impl NotificationPreferences {
    /// Preferences a user has before saving any.
    pub fn defaults_for(user_id: UserId) -> Self {
        Self {
            user_id,
            habits_enabled: true,
            tasks_enabled: true,
            habits_time: ReminderTime::hm(9, 0).unwrap_or_default(),
            tasks_time: ReminderTime::hm(18, 0).unwrap_or_default(),
            snooze_minutes: DEFAULT_SNOOZE_MINUTES,
        }
    }

    pub fn new(
        user_id: UserId,
        habits_enabled: bool,
        tasks_enabled: bool,
        habits_time: ReminderTime,
        tasks_time: ReminderTime,
        snooze_minutes: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            user_id,
            habits_enabled,
            tasks_enabled,
            habits_time,
            tasks_time,
            snooze_minutes: validate_snooze_minutes(snooze_minutes)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn habits_enabled(&self) -> bool {
        self.habits_enabled
    }

    pub fn tasks_enabled(&self) -> bool {
        self.tasks_enabled
    }

    pub fn habits_time(&self) -> ReminderTime {
        self.habits_time
    }

    pub fn tasks_time(&self) -> ReminderTime {
        self.tasks_time
    }

    pub fn snooze_minutes(&self) -> u32 {
        self.snooze_minutes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSnooze {
    user_id: UserId,
    notification_id: String,
    snoozed_at: DateTime<Utc>,
    snooze_until: DateTime<Utc>,
}

impl NotificationSnooze {
    pub fn new(
        user_id: UserId,
        notification_id: String,
        minutes: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let notification_id = notification_id.trim().to_string();
        if notification_id.is_empty() {
            return Err(DomainError::Validation(
                "notification_id cannot be empty".to_string(),
            ));
        }
        let minutes = validate_snooze_minutes(minutes)?;

        Ok(Self {
            user_id,
            notification_id,
            snoozed_at: now,
            snooze_until: now + Duration::minutes(i64::from(minutes)),
        })
    }

    pub fn restore(
        user_id: UserId,
        notification_id: String,
        snoozed_at: DateTime<Utc>,
        snooze_until: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            notification_id,
            snoozed_at,
            snooze_until,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn notification_id(&self) -> &str {
        &self.notification_id
    }

    pub fn snoozed_at(&self) -> DateTime<Utc> {
        self.snoozed_at
    }

    pub fn snooze_until(&self) -> DateTime<Utc> {
        self.snooze_until
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.snooze_until > now
    }

    /// Whole minutes left, rounded down.
    pub fn minutes_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.snooze_until - now).num_minutes().max(0)
    }
}
