use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::mood_commands::*;
use crate::application::dtos::{MessageDto, MoodLogDto};
use crate::application::utils::{format_date, parse_day};
use mindgarden_domain::mood::{EnergyLevel, MoodLevel, MoodLog, MoodLogRepository, MoodSource};
use mindgarden_domain::shared::{Clock, DomainError};

pub struct LogMoodHandler {
    mood_repo: Arc<dyn MoodLogRepository>,
    clock: Arc<dyn Clock>,
}

impl LogMoodHandler {
    pub fn new(mood_repo: Arc<dyn MoodLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { mood_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<LogMoodCommand> for LogMoodHandler {
    type Result = LogMoodResult;

    async fn handle(&self, cmd: LogMoodCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        let mood: MoodLevel = input.mood.parse()?;
        let energy = EnergyLevel::new(input.energy)?;
        let source = match input.source.as_deref() {
            Some(source) => source.parse::<MoodSource>()?,
            None => MoodSource::default(),
        };
        let notes = input
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let today = cmd.context.today(self.clock.as_ref());
        let log = MoodLog::new(
            cmd.context.user_id.clone(),
            today,
            mood,
            energy,
            notes,
            source,
            self.clock.now(),
        );

        let saved = self.mood_repo.upsert(&log).await?;
        info!(
            "[mood] logged user_id={} date={} mood={} energy={}",
            cmd.context.user_id,
            today,
            mood,
            energy.value()
        );

        Ok(MoodLogDto::from(&saved))
    }
}

pub struct DeleteMoodLogHandler {
    mood_repo: Arc<dyn MoodLogRepository>,
}

impl DeleteMoodLogHandler {
    pub fn new(mood_repo: Arc<dyn MoodLogRepository>) -> Self {
        Self { mood_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteMoodLogCommand> for DeleteMoodLogHandler {
    type Result = DeleteMoodLogResult;

    async fn handle(&self, cmd: DeleteMoodLogCommand) -> Result<Self::Result, DomainError> {
        let date = parse_day(&cmd.date)?;

        if !self.mood_repo.delete_on(&cmd.context.user_id, date).await? {
            return Err(DomainError::NotFound(format!(
                "No mood log found for {}",
                format_date(date)
            )));
        }
        info!(
            "[mood] deleted user_id={} date={}",
            cmd.context.user_id, date
        );

        Ok(MessageDto::new(format!(
            "Mood log for {} deleted successfully",
            format_date(date)
        )))
    }
}
