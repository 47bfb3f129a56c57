#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use mindgarden_domain::shared::UserId;
use mindgarden_domain::user::{User, UserRepository};
use mindgarden_infrastructure::persistence::repositories::SqliteUserRepository;
use mindgarden_infrastructure::persistence::Database;

/// Fresh in-memory database with every migration applied.
pub async fn setup_in_memory_db() -> Arc<SqlitePool> {
    let db = Database::in_memory().await.expect("Open in-memory database");
    db.run_migrations().await.expect("Run migrations");
    db.shared_pool()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

/// Registers a user so rows that reference `users(id)` can be inserted.
pub async fn seed_user(pool: &Arc<SqlitePool>, email: &str) -> UserId {
    let repo = SqliteUserRepository::new(pool.clone());
    let user = User::new(email.to_string(), "Test User".to_string(), None, fixed_now())
        .expect("Create user");
    repo.save(&user).await.expect("Save user");
    user.id().clone()
}
