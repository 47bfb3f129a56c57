use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::task_commands::*;
use crate::application::dtos::{MessageDto, TaskDto};
use crate::application::services::owned_task;
use crate::application::utils::parse_due_date;
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::task::{Task, TaskDraft, TaskPriority, TaskRepository, TaskStatus};

pub struct CreateTaskHandler {
    task_repo: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateTaskHandler {
    pub fn new(task_repo: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { task_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<CreateTaskCommand> for CreateTaskHandler {
    type Result = CreateTaskResult;

    async fn handle(&self, cmd: CreateTaskCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        let draft = TaskDraft {
            title: input.title,
            description: input.description,
            due_date: input.due_date.as_deref().map(parse_due_date).transpose()?,
            estimated_minutes: input.estimated_minutes,
            priority: input
                .priority
                .as_deref()
                .map(str::parse::<TaskPriority>)
                .transpose()?,
            category: input.category,
            effort_type: input.effort_type,
        };

        let now = self.clock.now();
        let task = Task::new(cmd.context.user_id.clone(), draft, now)?;
        self.task_repo.save(&task).await?;
        info!(
            "[task] created task_id={} user_id={} priority={}",
            task.id(),
            cmd.context.user_id,
            task.priority()
        );

        Ok(TaskDto::new(&task, now))
    }
}

pub struct UpdateTaskHandler {
    task_repo: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateTaskHandler {
    pub fn new(task_repo: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { task_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<UpdateTaskCommand> for UpdateTaskHandler {
    type Result = UpdateTaskResult;

    async fn handle(&self, cmd: UpdateTaskCommand) -> Result<Self::Result, DomainError> {
        let mut task =
            owned_task(self.task_repo.as_ref(), &cmd.task_id, &cmd.context.user_id).await?;
        let now = self.clock.now();
        let input = cmd.input;

        if let Some(title) = input.title {
            task.retitle(title, now)?;
        }
        if let Some(description) = input.description {
            task.describe(Some(description), now);
        }
        if let Some(due_date) = input.due_date {
            let due = if due_date.trim().is_empty() {
                None
            } else {
                Some(parse_due_date(&due_date)?)
            };
            task.reschedule(due, now);
        }
        if let Some(minutes) = input.estimated_minutes {
            task.estimate(minutes, now)?;
        }
        if let Some(priority) = input.priority {
            task.prioritize(priority.parse()?, now);
        }
        if let Some(category) = input.category {
            task.categorize(Some(category), now);
        }
        if let Some(effort_type) = input.effort_type {
            task.set_effort_type(Some(effort_type), now);
        }
        if let Some(status) = input.status {
            task.transition(status.parse::<TaskStatus>()?, now);
        }

        self.task_repo.save(&task).await?;
        info!(
            "[task] updated task_id={} status={}",
            task.id(),
            task.status()
        );

        Ok(TaskDto::new(&task, now))
    }
}

pub struct DeleteTaskHandler {
    task_repo: Arc<dyn TaskRepository>,
}

impl DeleteTaskHandler {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteTaskCommand> for DeleteTaskHandler {
    type Result = DeleteTaskResult;

    async fn handle(&self, cmd: DeleteTaskCommand) -> Result<Self::Result, DomainError> {
        let task = owned_task(self.task_repo.as_ref(), &cmd.task_id, &cmd.context.user_id).await?;

        self.task_repo.delete(task.id()).await?;
        info!("[task] deleted task_id={}", task.id());

        Ok(MessageDto::new("Task deleted successfully"))
    }
}

pub struct SetTaskCompletionHandler {
    task_repo: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl SetTaskCompletionHandler {
    pub fn new(task_repo: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { task_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<SetTaskCompletionCommand> for SetTaskCompletionHandler {
    type Result = SetTaskCompletionResult;

    async fn handle(&self, cmd: SetTaskCompletionCommand) -> Result<Self::Result, DomainError> {
        let mut task =
            owned_task(self.task_repo.as_ref(), &cmd.task_id, &cmd.context.user_id).await?;
        let now = self.clock.now();

        if cmd.completed {
            task.complete(now);
        } else {
            task.reopen(now);
        }

        self.task_repo.save(&task).await?;
        info!(
            "[task] completion task_id={} completed={}",
            task.id(),
            cmd.completed
        );

        Ok(TaskDto::new(&task, now))
    }
}
