use crate::application::commands::command_handler::Command;
use crate::application::context::UserContext;
use crate::application::dtos::{LogMoodInput, MessageDto, MoodLogDto};

/// Records today's mood, replacing an earlier entry for the same day.
#[derive(Debug, Clone)]
pub struct LogMoodCommand {
    pub context: UserContext,
    pub input: LogMoodInput,
}

impl Command for LogMoodCommand {}

pub type LogMoodResult = MoodLogDto;

#[derive(Debug, Clone)]
pub struct DeleteMoodLogCommand {
    pub context: UserContext,
    pub date: String,
}

impl Command for DeleteMoodLogCommand {}

pub type DeleteMoodLogResult = MessageDto;
