use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::{TaskDto, TaskListParams, TaskOverviewDto};
use crate::application::services::owned_task;
use crate::application::utils::parse_day;
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::task::{TaskFilter, TaskPriority, TaskRepository, TaskStatus};

const TODAY_LIMIT: u32 = 50;

pub struct TaskQueries {
    task_repo: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl TaskQueries {
    pub fn new(task_repo: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { task_repo, clock }
    }

    pub async fn get(&self, ctx: &UserContext, task_id: &str) -> Result<TaskDto, DomainError> {
        let task = owned_task(self.task_repo.as_ref(), task_id, &ctx.user_id).await?;
        Ok(TaskDto::new(&task, self.clock.now()))
    }

    pub async fn list(
        &self,
        ctx: &UserContext,
        params: TaskListParams,
    ) -> Result<Vec<TaskDto>, DomainError> {
        let filter = TaskFilter {
            status: params
                .status
                .as_deref()
                .map(str::parse::<TaskStatus>)
                .transpose()?,
            priority: params
                .priority
                .as_deref()
                .map(str::parse::<TaskPriority>)
                .transpose()?,
            due_between: params
                .due_date
                .as_deref()
                .map(parse_day)
                .transpose()?
                .map(|day| ctx.timezone.utc_window(day, day)),
            completed: params.completed,
            offset: params.offset.unwrap_or(0),
            ..TaskFilter::default()
        }
        .with_limit(params.limit)?;

        self.fetch(ctx, &filter).await
    }

    /// Tasks due during the user's local today, completed or not.
    pub async fn today(&self, ctx: &UserContext) -> Result<Vec<TaskDto>, DomainError> {
        let today = ctx.today(self.clock.as_ref());
        let filter = TaskFilter {
            due_between: Some(ctx.timezone.utc_window(today, today)),
            limit: TODAY_LIMIT,
            ..TaskFilter::default()
        };
        self.fetch(ctx, &filter).await
    }

    pub async fn overdue(&self, ctx: &UserContext) -> Result<Vec<TaskDto>, DomainError> {
        let now = self.clock.now();
        let tasks = self.task_repo.list_overdue(&ctx.user_id, now).await?;
        Ok(tasks.iter().map(|t| TaskDto::new(t, now)).collect())
    }

    pub async fn overview(&self, ctx: &UserContext) -> Result<TaskOverviewDto, DomainError> {
        let counts = self.task_repo.counts(&ctx.user_id, self.clock.now()).await?;
        Ok(counts.into())
    }

    async fn fetch(
        &self,
        ctx: &UserContext,
        filter: &TaskFilter,
    ) -> Result<Vec<TaskDto>, DomainError> {
        let now = self.clock.now();
        let tasks = self.task_repo.list(&ctx.user_id, filter).await?;
        Ok(tasks.iter().map(|t| TaskDto::new(t, now)).collect())
    }
}
