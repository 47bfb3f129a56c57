use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::persistence::rows::{count_from_db, date_to_db};
use crate::persistence::{ResultExt, SqliteRepositoryBase};
use mindgarden_domain::habit::{HabitCompletion, HabitCompletionRepository};
use mindgarden_domain::shared::{DomainError, HabitId, UserId};
use mindgarden_domain::streak::RawDate;

// Range filters compare on the first ten characters so rows that stored a full
// timestamp still fall on their calendar day.

pub struct SqliteHabitCompletionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitCompletionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn raw_dates(
        &self,
        query: &str,
        id: &str,
        context: &str,
    ) -> Result<Vec<RawDate>, DomainError> {
        let values: Vec<String> = sqlx::query_scalar(query)
            .bind(id)
            .fetch_all(self.base.pool())
            .await
            .to_repo_err(context)?;

        Ok(values.into_iter().map(RawDate::Text).collect())
    }

    async fn count(
        &self,
        query: &str,
        binds: [&str; 3],
        context: &str,
    ) -> Result<u32, DomainError> {
        let count: i64 = sqlx::query_scalar(query)
            .bind(binds[0])
            .bind(binds[1])
            .bind(binds[2])
            .fetch_one(self.base.pool())
            .await
            .to_repo_err(context)?;

        Ok(count_from_db(count))
    }
}

#[async_trait]
impl HabitCompletionRepository for SqliteHabitCompletionRepository {
    async fn insert(&self, completion: &HabitCompletion) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habit_completions (id, user_id, habit_id, date, completed_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(completion.id().as_str())
                    .bind(completion.user_id().as_str())
                    .bind(completion.habit_id().as_str())
                    .bind(date_to_db(completion.date()))
                    .bind(completion.completed_at()),
                "Insert habit completion",
            )
            .await?;

        debug!(
            "[completions] inserted habit_id={} date={}",
            completion.habit_id(),
            completion.date()
        );
        Ok(())
    }

    async fn exists_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM habit_completions
                WHERE habit_id = ?1 AND substr(date, 1, 10) = ?2
            )
        "#;

        let exists: bool = sqlx::query_scalar(query)
            .bind(habit_id.as_str())
            .bind(date_to_db(date))
            .fetch_one(self.base.pool())
            .await
            .to_repo_err("Check habit completion")?;

        Ok(exists)
    }

    async fn delete_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError> {
        let query = r#"
            DELETE FROM habit_completions
            WHERE habit_id = ?1 AND substr(date, 1, 10) = ?2
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(habit_id.as_str())
                    .bind(date_to_db(date)),
                "Delete habit completion",
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn raw_dates_for_habit(&self, habit_id: &HabitId) -> Result<Vec<RawDate>, DomainError> {
        self.raw_dates(
            "SELECT date FROM habit_completions WHERE habit_id = ?1",
            habit_id.as_str(),
            "List completion dates by habit",
        )
        .await
    }

    async fn raw_dates_for_user(&self, user_id: &UserId) -> Result<Vec<RawDate>, DomainError> {
        self.raw_dates(
            "SELECT date FROM habit_completions WHERE user_id = ?1",
            user_id.as_str(),
            "List completion dates by user",
        )
        .await
    }

    async fn count_for_habit(&self, habit_id: &HabitId) -> Result<u32, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT substr(date, 1, 10)) FROM habit_completions WHERE habit_id = ?1",
        )
        .bind(habit_id.as_str())
        .fetch_one(self.base.pool())
        .await
        .to_repo_err("Count habit completions")?;

        Ok(count_from_db(count))
    }

    async fn count_for_habit_between(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32, DomainError> {
        let query = r#"
            SELECT COUNT(*) FROM habit_completions
            WHERE habit_id = ?1 AND substr(date, 1, 10) BETWEEN ?2 AND ?3
        "#;
        let (start, end) = (date_to_db(start), date_to_db(end));
        self.count(
            query,
            [habit_id.as_str(), &start, &end],
            "Count habit completions in range",
        )
        .await
    }

    async fn count_for_user_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32, DomainError> {
        let query = r#"
            SELECT COUNT(*) FROM habit_completions
            WHERE user_id = ?1 AND substr(date, 1, 10) BETWEEN ?2 AND ?3
        "#;
        let (start, end) = (date_to_db(start), date_to_db(end));
        self.count(
            query,
            [user_id.as_str(), &start, &end],
            "Count user completions in range",
        )
        .await
    }
}
