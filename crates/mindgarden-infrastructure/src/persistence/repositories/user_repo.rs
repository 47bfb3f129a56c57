use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use mindgarden_domain::shared::{DomainError, UserId};
use mindgarden_domain::user::{User, UserRepository};

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    timezone: String,
    created_at: DateTime<Utc>,
    last_seen_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> User {
        User::restore(
            UserId::from_string(&self.id),
            self.email,
            self.name,
            self.timezone,
            self.created_at,
            self.last_seen_at,
        )
    }
}

const SELECT_USER: &str = r#"
    SELECT id, email, name, timezone, created_at, last_seen_at
    FROM users
"#;

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        // Email is fixed at registration; only profile fields change afterwards.
        let query = r#"
            INSERT INTO users (id, email, name, timezone, created_at, last_seen_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                timezone = excluded.timezone,
                last_seen_at = excluded.last_seen_at
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(user.id().as_str())
                    .bind(user.email())
                    .bind(user.name())
                    .bind(user.timezone_name())
                    .bind(user.created_at())
                    .bind(user.last_seen_at()),
                "Save user",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = format!("{SELECT_USER} WHERE id = ?1");
        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find user by ID")
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{SELECT_USER} WHERE email = ?1");
        let row: Option<UserRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(email.trim().to_lowercase()),
                "Find user by email",
            )
            .await?;

        Ok(row.map(UserRow::into_user))
    }
}
