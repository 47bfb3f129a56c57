use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::persistence::rows::{count_from_db, enum_from_db};
use crate::persistence::{ResultExt, SqliteRepositoryBase};
use mindgarden_domain::shared::{DomainError, TaskId, UserId};
use mindgarden_domain::task::{Task, TaskCounts, TaskFilter, TaskRepository, TaskStatus};

#[derive(FromRow)]
struct TaskRow {
    id: String,
    user_id: String,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    estimated_minutes: i64,
    priority: String,
    category: Option<String>,
    effort_type: Option<String>,
    status: String,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TaskRow {
    fn try_into_task(self) -> Result<Task, DomainError> {
        let estimated_minutes = u32::try_from(self.estimated_minutes).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid tasks.estimated_minutes: {}",
                self.estimated_minutes
            ))
        })?;

        Ok(Task::restore(
            TaskId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.title,
            self.description,
            self.due_date,
            estimated_minutes,
            enum_from_db(&self.priority, "tasks.priority")?,
            self.category,
            self.effort_type,
            enum_from_db(&self.status, "tasks.status")?,
            self.completed_at,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[derive(FromRow)]
struct TaskCountsRow {
    total: i64,
    completed: i64,
    high_priority: i64,
    overdue: i64,
}

const SELECT_TASK: &str = r#"
    SELECT
        id,
        user_id,
        title,
        description,
        due_date,
        estimated_minutes,
        priority,
        category,
        effort_type,
        status,
        completed_at,
        created_at,
        updated_at
    FROM tasks
"#;

// Undated tasks sort after dated ones.
const ORDER_BY_DUE: &str = " ORDER BY due_date IS NULL, due_date ASC, created_at ASC";

pub struct SqliteTaskRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTaskRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn count_between(
        &self,
        column: &str,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        context: &str,
    ) -> Result<u32, DomainError> {
        let query = format!(
            "SELECT COUNT(*) FROM tasks WHERE user_id = ?1 AND {column} >= ?2 AND {column} < ?3"
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(user_id.as_str())
            .bind(start)
            .bind(end)
            .fetch_one(self.base.pool())
            .await
            .to_repo_err(context)?;

        Ok(count_from_db(count))
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO tasks (
                id,
                user_id,
                title,
                description,
                due_date,
                estimated_minutes,
                priority,
                category,
                effort_type,
                status,
                completed_at,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                due_date = excluded.due_date,
                estimated_minutes = excluded.estimated_minutes,
                priority = excluded.priority,
                category = excluded.category,
                effort_type = excluded.effort_type,
                status = excluded.status,
                completed_at = excluded.completed_at,
                updated_at = excluded.updated_at
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(task.id().as_str())
                    .bind(task.user_id().as_str())
                    .bind(task.title())
                    .bind(task.description())
                    .bind(task.due_date())
                    .bind(i64::from(task.estimated_minutes()))
                    .bind(task.priority().as_str())
                    .bind(task.category())
                    .bind(task.effort_type())
                    .bind(task.status().as_str())
                    .bind(task.completed_at())
                    .bind(task.created_at())
                    .bind(task.updated_at()),
                "Save task",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let query = format!("{SELECT_TASK} WHERE id = ?1");
        let row: Option<TaskRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find task by ID")
            .await?;

        row.map(TaskRow::try_into_task).transpose()
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM tasks WHERE id = ?1").bind(id.as_str()),
                "Delete task",
            )
            .await?;
        Ok(())
    }

    async fn list(&self, user_id: &UserId, filter: &TaskFilter) -> Result<Vec<Task>, DomainError> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_TASK);
        builder.push(" WHERE user_id = ").push_bind(user_id.as_str());

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(priority) = filter.priority {
            builder.push(" AND priority = ").push_bind(priority.as_str());
        }
        if let Some((start, end)) = filter.due_between {
            builder
                .push(" AND due_date >= ")
                .push_bind(start)
                .push(" AND due_date < ")
                .push_bind(end);
        }
        if let Some(completed) = filter.completed {
            builder.push(if completed {
                " AND status = "
            } else {
                " AND status != "
            });
            builder.push_bind(TaskStatus::Completed.as_str());
        }

        builder
            .push(ORDER_BY_DUE)
            .push(" LIMIT ")
            .push_bind(i64::from(filter.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(filter.offset));

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(builder.build_query_as(), "List tasks")
            .await?;

        rows.into_iter().map(TaskRow::try_into_task).collect()
    }

    async fn list_overdue(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{SELECT_TASK} WHERE user_id = ?1 AND status != 'completed' \
             AND due_date IS NOT NULL AND due_date < ?2 ORDER BY due_date ASC"
        );
        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()).bind(now),
                "List overdue tasks",
            )
            .await?;

        rows.into_iter().map(TaskRow::try_into_task).collect()
    }

    async fn list_incomplete(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError> {
        let query =
            format!("{SELECT_TASK} WHERE user_id = ?1 AND status != 'completed'{ORDER_BY_DUE}");
        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "List incomplete tasks",
            )
            .await?;

        rows.into_iter().map(TaskRow::try_into_task).collect()
    }

    async fn counts(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<TaskCounts, DomainError> {
        let query = r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) AS completed,
                COALESCE(SUM(CASE WHEN priority IN ('high', 'urgent') THEN 1 ELSE 0 END), 0)
                    AS high_priority,
                COALESCE(SUM(CASE
                    WHEN status != 'completed' AND due_date IS NOT NULL AND due_date < ?2
                    THEN 1 ELSE 0 END), 0) AS overdue
            FROM tasks
            WHERE user_id = ?1
        "#;

        let row: Option<TaskCountsRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()).bind(now),
                "Count tasks",
            )
            .await?;

        Ok(row
            .map(|r| TaskCounts {
                total: count_from_db(r.total),
                completed: count_from_db(r.completed),
                high_priority: count_from_db(r.high_priority),
                overdue: count_from_db(r.overdue),
            })
            .unwrap_or_default())
    }

    async fn count_created_between(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        self.count_between("created_at", user_id, start, end, "Count tasks created")
            .await
    }

    async fn count_completed_between(
        &self,
        user_id: &UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        self.count_between("completed_at", user_id, start, end, "Count tasks completed")
            .await
    }
}
