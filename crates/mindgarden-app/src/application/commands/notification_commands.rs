use crate::application::commands::command_handler::Command;
use crate::application::context::UserContext;
use crate::application::dtos::{
    NotificationPreferencesDto, SnoozeInput, SnoozeResultDto, UpdatePreferencesInput,
};

// ============================================================
// Update Notification Preferences Command
// ============================================================

#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub context: UserContext,
    pub input: UpdatePreferencesInput,
}

impl Command for UpdatePreferencesCommand {}

pub type UpdatePreferencesResult = NotificationPreferencesDto;

// ============================================================
// Snooze Notification Command
// ============================================================

#[derive(Debug, Clone)]
pub struct SnoozeNotificationCommand {
    pub context: UserContext,
    pub input: SnoozeInput,
}

impl Command for SnoozeNotificationCommand {}

pub type SnoozeNotificationResult = SnoozeResultDto;
