use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::rows::{json_from_db, json_to_db};
use crate::persistence::{ResultExt, SqliteRepositoryBase};
use mindgarden_domain::habit::{Frequency, Habit, HabitRepository};
use mindgarden_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    description: Option<String>,
    frequency: String,
    target_per_week: i64,
    category: Option<String>,
    target_days: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let frequency: Frequency = json_from_db(&self.frequency, "habits.frequency")?;
        let target_days: Vec<u8> = json_from_db(&self.target_days, "habits.target_days")?;
        let target_per_week = u8::try_from(self.target_per_week).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid habits.target_per_week: {}",
                self.target_per_week
            ))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            self.description,
            frequency,
            target_per_week,
            self.category,
            target_days,
            self.is_active,
            self.created_at,
            self.updated_at,
        ))
    }
}

const SELECT_HABIT: &str = r#"
    SELECT
        id,
        user_id,
        name,
        description,
        frequency,
        target_per_week,
        category,
        target_days,
        is_active,
        created_at,
        updated_at
    FROM habits
"#;

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn fetch_habits(
        &self,
        query: &str,
        user_id: &UserId,
        context: &str,
    ) -> Result<Vec<Habit>, DomainError> {
        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(sqlx::query_as(query).bind(user_id.as_str()), context)
            .await?;

        rows.into_iter().map(HabitRow::try_into_habit).collect()
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habits (
                id,
                user_id,
                name,
                description,
                frequency,
                target_per_week,
                category,
                target_days,
                is_active,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                frequency = excluded.frequency,
                target_per_week = excluded.target_per_week,
                category = excluded.category,
                target_days = excluded.target_days,
                is_active = excluded.is_active,
                updated_at = excluded.updated_at
        "#;

        let frequency = json_to_db(habit.frequency(), "habits.frequency")?;
        let target_days = json_to_db(&habit.target_days(), "habits.target_days")?;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.user_id().as_str())
                    .bind(habit.name())
                    .bind(habit.description())
                    .bind(frequency)
                    .bind(i64::from(habit.target_per_week()))
                    .bind(habit.category())
                    .bind(target_days)
                    .bind(habit.is_active())
                    .bind(habit.created_at())
                    .bind(habit.updated_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = format!("{SELECT_HABIT} WHERE id = ?1");
        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(HabitRow::try_into_habit).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query = format!("{SELECT_HABIT} WHERE user_id = ?1 ORDER BY created_at ASC");
        self.fetch_habits(&query, user_id, "Find habits by user").await
    }

    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query =
            format!("{SELECT_HABIT} WHERE user_id = ?1 AND is_active = 1 ORDER BY created_at ASC");
        self.fetch_habits(&query, user_id, "Find active habits by user")
            .await
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let mut tx = self.base.pool().begin().await.to_repo_err("Begin delete habit")?;

        sqlx::query("DELETE FROM habit_completions WHERE habit_id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .to_repo_err("Delete habit completions")?;

        sqlx::query("DELETE FROM habits WHERE id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .to_repo_err("Delete habit")?;

        tx.commit().await.to_repo_err("Commit delete habit")?;
        Ok(())
    }
}
