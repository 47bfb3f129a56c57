use serde::{Deserialize, Serialize};

use mindgarden_domain::notification::NotificationPreferences;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferencesDto {
    pub habits_enabled: bool,
    pub tasks_enabled: bool,
    pub habits_time: String,
    pub tasks_time: String,
    #[serde(rename = "snooze_duration", alias = "snooze_minutes")]
    pub snooze_minutes: u32,
}

impl From<&NotificationPreferences> for NotificationPreferencesDto {
    fn from(prefs: &NotificationPreferences) -> Self {
        Self {
            habits_enabled: prefs.habits_enabled(),
            tasks_enabled: prefs.tasks_enabled(),
            habits_time: prefs.habits_time().to_string(),
            tasks_time: prefs.tasks_time().to_string(),
            snooze_minutes: prefs.snooze_minutes(),
        }
    }
}

/// Partial update; omitted fields keep their saved (or default) value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePreferencesInput {
    pub habits_enabled: Option<bool>,
    pub tasks_enabled: Option<bool>,
    pub habits_time: Option<String>,
    pub tasks_time: Option<String>,
    #[serde(alias = "snooze_duration")]
    pub snooze_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingHabitDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTaskDto {
    pub id: String,
    pub title: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub is_overdue: bool,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingNotificationsDto {
    pub habits: Vec<PendingHabitDto>,
    pub tasks: Vec<PendingTaskDto>,
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnoozeInput {
    pub notification_id: String,
    /// Falls back to the user's preferred snooze length.
    #[serde(alias = "duration")]
    pub minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnoozeResultDto {
    pub message: String,
    pub notification_id: String,
    pub snooze_until: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnoozeStatusDto {
    pub is_snoozed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_remaining: Option<i64>,
}
