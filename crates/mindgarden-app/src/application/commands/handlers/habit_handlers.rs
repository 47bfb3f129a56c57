use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::{
    HabitCompletionDto, HabitDto, HabitLogResultDto, HabitProgress, HabitUncompleteDto,
    MessageDto,
};
use crate::application::services::{owned_habit, StreakReader};
use crate::application::utils::{format_date, format_timestamp, parse_day};
use mindgarden_domain::habit::{
    Frequency, Habit, HabitCompletion, HabitCompletionRepository, HabitRepository,
};
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::streak::parse_date_text;

// ============================================================
// Create
// ============================================================

pub struct CreateHabitHandler {
    habit_repo: Arc<dyn HabitRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateHabitHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { habit_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitHandler {
    type Result = CreateHabitResult;

    async fn handle(&self, cmd: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        let habit = Habit::new(
            cmd.context.user_id.clone(),
            input.name,
            input.description,
            Frequency::parse(&input.frequency)?,
            input.target_per_week,
            input.category,
            input.target_days,
            self.clock.now(),
        )?;

        self.habit_repo.save(&habit).await?;
        info!(
            "[habit] created habit_id={} user_id={}",
            habit.id(),
            cmd.context.user_id
        );

        Ok(HabitDto::new(&habit, HabitProgress::default()))
    }
}

// ============================================================
// Update
// ============================================================

pub struct UpdateHabitHandler {
    habit_repo: Arc<dyn HabitRepository>,
    streaks: Arc<StreakReader>,
    clock: Arc<dyn Clock>,
}

impl UpdateHabitHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        streaks: Arc<StreakReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            streaks,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateHabitCommand> for UpdateHabitHandler {
    type Result = UpdateHabitResult;

    async fn handle(&self, cmd: UpdateHabitCommand) -> Result<Self::Result, DomainError> {
        let mut habit =
            owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.context.user_id).await?;
        let now = self.clock.now();
        let input = cmd.input;

        if let Some(name) = input.name {
            habit.rename(name, now)?;
        }
        if let Some(description) = input.description {
            habit.describe(Some(description), now);
        }
        if let Some(frequency) = input.frequency {
            habit.reschedule(Frequency::parse(&frequency)?, now);
        }
        if let Some(target) = input.target_per_week {
            habit.set_target_per_week(target, now)?;
        }
        if let Some(category) = input.category {
            habit.categorize(Some(category), now);
        }
        if let Some(days) = input.target_days {
            habit.set_target_days(days, now)?;
        }
        if let Some(active) = input.is_active {
            habit.set_active(active, now);
        }

        self.habit_repo.save(&habit).await?;
        info!("[habit] updated habit_id={}", habit.id());

        let today = cmd.context.today(self.clock.as_ref());
        let progress = self.streaks.habit_progress(habit.id(), today).await?;
        Ok(HabitDto::new(&habit, progress))
    }
}

// ============================================================
// Delete
// ============================================================

pub struct DeleteHabitHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl DeleteHabitHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitHandler {
    type Result = DeleteHabitResult;

    async fn handle(&self, cmd: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        let habit =
            owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.context.user_id).await?;

        self.habit_repo.delete(habit.id()).await?;
        info!("[habit] deleted habit_id={}", habit.id());

        Ok(MessageDto::new("Habit deleted successfully"))
    }
}

// ============================================================
// Log / Complete / Uncomplete
// ============================================================

/// Shared by the three completion commands: ownership check, write, then a fresh streak read.
pub struct HabitCompletionHandler {
    habit_repo: Arc<dyn HabitRepository>,
    completion_repo: Arc<dyn HabitCompletionRepository>,
    streaks: Arc<StreakReader>,
    clock: Arc<dyn Clock>,
}

impl HabitCompletionHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        completion_repo: Arc<dyn HabitCompletionRepository>,
        streaks: Arc<StreakReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            completion_repo,
            streaks,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<LogHabitCommand> for HabitCompletionHandler {
    type Result = LogHabitResult;

    async fn handle(&self, cmd: LogHabitCommand) -> Result<Self::Result, DomainError> {
        let habit =
            owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.context.user_id).await?;
        let today = cmd.context.today(self.clock.as_ref());

        let date = match cmd.input.date.as_deref() {
            Some(raw) => parse_date_text(raw).unwrap_or_else(|e| {
                warn!(
                    "[habit] unreadable log date habit_id={} value={:?} error={}; using today",
                    habit.id(),
                    raw,
                    e
                );
                today
            }),
            None => today,
        };

        if cmd.input.completed {
            let completion = HabitCompletion::new(
                cmd.context.user_id.clone(),
                habit.id().clone(),
                date,
                self.clock.now(),
            );
            match self.completion_repo.insert(&completion).await {
                Ok(()) | Err(DomainError::Conflict(_)) => {}
                Err(e) => return Err(e),
            }
        } else {
            self.completion_repo.delete_on(habit.id(), date).await?;
        }

        let streak = self.streaks.habit_streaks(habit.id(), today).await?;
        info!(
            "[habit] logged habit_id={} date={} completed={} current_streak={}",
            habit.id(),
            date,
            cmd.input.completed,
            streak.current_streak
        );

        Ok(HabitLogResultDto {
            message: if cmd.input.completed {
                "Habit logged successfully".to_string()
            } else {
                "Habit log removed".to_string()
            },
            habit_id: habit.id().as_str().to_string(),
            date: format_date(date),
            completed: cmd.input.completed,
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
        })
    }
}

#[async_trait]
impl CommandHandler<CompleteHabitCommand> for HabitCompletionHandler {
    type Result = CompleteHabitResult;

    async fn handle(&self, cmd: CompleteHabitCommand) -> Result<Self::Result, DomainError> {
        let habit =
            owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.context.user_id).await?;
        let today = cmd.context.today(self.clock.as_ref());
        let date = match cmd.date.as_deref() {
            Some(raw) => parse_day(raw)?,
            None => today,
        };

        let completion = HabitCompletion::new(
            cmd.context.user_id.clone(),
            habit.id().clone(),
            date,
            self.clock.now(),
        );
        if let Err(e) = self.completion_repo.insert(&completion).await {
            return Err(match e {
                DomainError::Conflict(_) => DomainError::Conflict(format!(
                    "Habit already completed on {}",
                    format_date(date)
                )),
                other => other,
            });
        }

        let streak = self.streaks.habit_streaks(habit.id(), today).await?;
        info!(
            "[habit] completed habit_id={} date={} current_streak={} longest_streak={}",
            habit.id(),
            date,
            streak.current_streak,
            streak.longest_streak
        );

        Ok(HabitCompletionDto {
            message: "Habit completed successfully".to_string(),
            habit_id: habit.id().as_str().to_string(),
            completion_date: format_date(date),
            completed_at: format_timestamp(completion.completed_at()),
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
        })
    }
}

#[async_trait]
impl CommandHandler<UncompleteHabitCommand> for HabitCompletionHandler {
    type Result = UncompleteHabitResult;

    async fn handle(&self, cmd: UncompleteHabitCommand) -> Result<Self::Result, DomainError> {
        let habit =
            owned_habit(self.habit_repo.as_ref(), &cmd.habit_id, &cmd.context.user_id).await?;
        let date = parse_day(&cmd.date)?;

        if !self.completion_repo.delete_on(habit.id(), date).await? {
            return Err(DomainError::NotFound(format!(
                "No completion found for {}",
                format_date(date)
            )));
        }

        let today = cmd.context.today(self.clock.as_ref());
        let streak = self.streaks.habit_streaks(habit.id(), today).await?;
        info!(
            "[habit] uncompleted habit_id={} date={} current_streak={}",
            habit.id(),
            date,
            streak.current_streak
        );

        Ok(HabitUncompleteDto {
            message: "Habit completion removed".to_string(),
            habit_id: habit.id().as_str().to_string(),
            date: format_date(date),
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
        })
    }
}
