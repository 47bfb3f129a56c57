use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::rows::{date_from_db, date_to_db, enum_from_db};
use crate::persistence::SqliteRepositoryBase;
use mindgarden_domain::mood::{EnergyLevel, MoodLog, MoodLogRepository};
use mindgarden_domain::shared::{DomainError, MoodLogId, UserId};

#[derive(FromRow)]
struct MoodLogRow {
    id: String,
    user_id: String,
    date: String,
    mood: String,
    energy: i64,
    notes: Option<String>,
    source: String,
    logged_at: DateTime<Utc>,
}

impl MoodLogRow {
    fn try_into_log(self) -> Result<MoodLog, DomainError> {
        let energy = u8::try_from(self.energy)
            .ok()
            .and_then(|value| EnergyLevel::new(value).ok())
            .ok_or_else(|| {
                DomainError::DataIntegrity(format!("Invalid mood_logs.energy: {}", self.energy))
            })?;

        Ok(MoodLog::restore(
            MoodLogId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            date_from_db(&self.date, "mood_logs.date")?,
            enum_from_db(&self.mood, "mood_logs.mood")?,
            energy,
            self.notes,
            enum_from_db(&self.source, "mood_logs.source")?,
            self.logged_at,
        ))
    }
}

const SELECT_MOOD_LOG: &str = r#"
    SELECT id, user_id, date, mood, energy, notes, source, logged_at
    FROM mood_logs
"#;

pub struct SqliteMoodLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteMoodLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl MoodLogRepository for SqliteMoodLogRepository {
    async fn upsert(&self, log: &MoodLog) -> Result<MoodLog, DomainError> {
        // The existing row keeps its id; the caller gets back what is stored.
        let query = r#"
            INSERT INTO mood_logs (id, user_id, date, mood, energy, notes, source, logged_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(user_id, date) DO UPDATE SET
                mood = excluded.mood,
                energy = excluded.energy,
                notes = excluded.notes,
                source = excluded.source,
                logged_at = excluded.logged_at
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(log.id().as_str())
                    .bind(log.user_id().as_str())
                    .bind(date_to_db(log.date()))
                    .bind(log.mood().as_str())
                    .bind(i64::from(log.energy().value()))
                    .bind(log.notes())
                    .bind(log.source().as_str())
                    .bind(log.logged_at()),
                "Upsert mood log",
            )
            .await?;

        self.find_on(log.user_id(), log.date())
            .await?
            .ok_or_else(|| {
                DomainError::Repository(format!(
                    "Mood log for {} vanished after upsert",
                    log.date()
                ))
            })
    }

    async fn find_on(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<MoodLog>, DomainError> {
        let query = format!("{SELECT_MOOD_LOG} WHERE user_id = ?1 AND date = ?2");
        let row: Option<MoodLogRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(date_to_db(date)),
                "Find mood log by date",
            )
            .await?;

        row.map(MoodLogRow::try_into_log).transpose()
    }

    async fn list_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoodLog>, DomainError> {
        let query = format!(
            "{SELECT_MOOD_LOG} WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date ASC"
        );
        let rows: Vec<MoodLogRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(date_to_db(start))
                    .bind(date_to_db(end)),
                "List mood logs in range",
            )
            .await?;

        rows.into_iter().map(MoodLogRow::try_into_log).collect()
    }

    async fn delete_on(&self, user_id: &UserId, date: NaiveDate) -> Result<bool, DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("DELETE FROM mood_logs WHERE user_id = ?1 AND date = ?2")
                    .bind(user_id.as_str())
                    .bind(date_to_db(date)),
                "Delete mood log",
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
