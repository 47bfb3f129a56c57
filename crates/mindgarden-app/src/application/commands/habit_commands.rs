use crate::application::commands::command_handler::Command;
use crate::application::context::UserContext;
use crate::application::dtos::{
    CreateHabitInput, HabitCompletionDto, HabitDto, HabitLogResultDto, HabitUncompleteDto,
    LogHabitInput, MessageDto, UpdateHabitInput,
};

// ============================================================
// Create Habit Command
// ============================================================

#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub context: UserContext,
    pub input: CreateHabitInput,
}

impl Command for CreateHabitCommand {}

pub type CreateHabitResult = HabitDto;

// ============================================================
// Update Habit Command
// ============================================================

#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub context: UserContext,
    pub habit_id: String,
    pub input: UpdateHabitInput,
}

impl Command for UpdateHabitCommand {}

pub type UpdateHabitResult = HabitDto;

// ============================================================
// Delete Habit Command
// ============================================================

#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub context: UserContext,
    pub habit_id: String,
}

impl Command for DeleteHabitCommand {}

pub type DeleteHabitResult = MessageDto;

// ============================================================
// Log Habit Command
// ============================================================

/// Marks (or unmarks) a day. A date that cannot be read falls back to today.
#[derive(Debug, Clone)]
pub struct LogHabitCommand {
    pub context: UserContext,
    pub habit_id: String,
    pub input: LogHabitInput,
}

impl Command for LogHabitCommand {}

pub type LogHabitResult = HabitLogResultDto;

// ============================================================
// Complete / Uncomplete Habit Commands
// ============================================================

#[derive(Debug, Clone)]
pub struct CompleteHabitCommand {
    pub context: UserContext,
    pub habit_id: String,
    /// Defaults to today.
    pub date: Option<String>,
}

impl Command for CompleteHabitCommand {}

pub type CompleteHabitResult = HabitCompletionDto;

#[derive(Debug, Clone)]
pub struct UncompleteHabitCommand {
    pub context: UserContext,
    pub habit_id: String,
    pub date: String,
}

impl Command for UncompleteHabitCommand {}

pub type UncompleteHabitResult = HabitUncompleteDto;
