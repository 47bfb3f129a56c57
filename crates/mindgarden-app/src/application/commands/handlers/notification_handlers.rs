use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::notification_commands::*;
use crate::application::dtos::{NotificationPreferencesDto, SnoozeResultDto};
use crate::application::utils::format_timestamp;
use mindgarden_domain::notification::{
    NotificationPreferences, NotificationRepository, NotificationSnooze, ReminderTime,
};
use mindgarden_domain::shared::{Clock, DomainError};

// ============================================================
// Update Preferences Handler
// ============================================================

pub struct UpdatePreferencesHandler {
    notification_repo: Arc<dyn NotificationRepository>,
}

impl UpdatePreferencesHandler {
    pub fn new(notification_repo: Arc<dyn NotificationRepository>) -> Self {
        Self { notification_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdatePreferencesCommand> for UpdatePreferencesHandler {
    type Result = UpdatePreferencesResult;

    async fn handle(&self, cmd: UpdatePreferencesCommand) -> Result<Self::Result, DomainError> {
        let user_id = cmd.context.user_id;
        let current = self
            .notification_repo
            .find_preferences(&user_id)
            .await?
            .unwrap_or_else(|| NotificationPreferences::defaults_for(user_id.clone()));
        let input = cmd.input;

        let habits_time = match input.habits_time.as_deref() {
            Some(time) => time.parse::<ReminderTime>()?,
            None => current.habits_time(),
        };
        let tasks_time = match input.tasks_time.as_deref() {
            Some(time) => time.parse::<ReminderTime>()?,
            None => current.tasks_time(),
        };

        let updated = NotificationPreferences::new(
            user_id.clone(),
            input.habits_enabled.unwrap_or(current.habits_enabled()),
            input.tasks_enabled.unwrap_or(current.tasks_enabled()),
            habits_time,
            tasks_time,
            input.snooze_minutes.unwrap_or(current.snooze_minutes()),
        )?;

        self.notification_repo.save_preferences(&updated).await?;
        info!("[notification] preferences saved user_id={}", user_id);

        Ok(NotificationPreferencesDto::from(&updated))
    }
}

// ============================================================
// Snooze Notification Handler
// ============================================================

pub struct SnoozeNotificationHandler {
    notification_repo: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl SnoozeNotificationHandler {
    pub fn new(notification_repo: Arc<dyn NotificationRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            notification_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<SnoozeNotificationCommand> for SnoozeNotificationHandler {
    type Result = SnoozeNotificationResult;

    async fn handle(&self, cmd: SnoozeNotificationCommand) -> Result<Self::Result, DomainError> {
        let user_id = cmd.context.user_id;
        let minutes = match cmd.input.minutes {
            Some(minutes) => minutes,
            None => self
                .notification_repo
                .find_preferences(&user_id)
                .await?
                .unwrap_or_else(|| NotificationPreferences::defaults_for(user_id.clone()))
                .snooze_minutes(),
        };

        let snooze = NotificationSnooze::new(
            user_id.clone(),
            cmd.input.notification_id,
            minutes,
            self.clock.now(),
        )?;
        self.notification_repo.save_snooze(&snooze).await?;
        info!(
            "[notification] snoozed user_id={} notification_id={} minutes={}",
            user_id,
            snooze.notification_id(),
            minutes
        );

        Ok(SnoozeResultDto {
            message: format!("Notification snoozed for {minutes} minutes"),
            notification_id: snooze.notification_id().to_string(),
            snooze_until: format_timestamp(snooze.snooze_until()),
        })
    }
}
