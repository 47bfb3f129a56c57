use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    AnalyticsQueries, HabitQueries, MoodQueries, NotificationQueries, TaskQueries, UserQueries,
};
use crate::application::services::StreakReader;
use crate::presentation::state::{AppState, CommandHandlers, Queries, Repositories, SharedState};
use mindgarden_domain::shared::Clock;
use mindgarden_infrastructure::config::Environment;
use mindgarden_infrastructure::persistence::repositories::{
    SqliteHabitCompletionRepository, SqliteHabitRepository, SqliteMoodLogRepository,
    SqliteNotificationRepository, SqliteTaskRepository, SqliteUserRepository,
};

/// SQLite-backed repositories sharing one pool.
pub fn sqlite_repositories(pool: Arc<SqlitePool>) -> Repositories {
    Repositories {
        user: Arc::new(SqliteUserRepository::new(pool.clone())),
        habit: Arc::new(SqliteHabitRepository::new(pool.clone())),
        completion: Arc::new(SqliteHabitCompletionRepository::new(pool.clone())),
        task: Arc::new(SqliteTaskRepository::new(pool.clone())),
        mood: Arc::new(SqliteMoodLogRepository::new(pool.clone())),
        notification: Arc::new(SqliteNotificationRepository::new(pool)),
    }
}

/// Wire handlers and query services over `repositories`.
pub fn build_state(
    repositories: Repositories,
    clock: Arc<dyn Clock>,
    environment: Environment,
) -> SharedState {
    let streaks = Arc::new(StreakReader::new(repositories.completion.clone()));

    let command_handlers = CommandHandlers {
        create_habit: Arc::new(CreateHabitHandler::new(
            repositories.habit.clone(),
            clock.clone(),
        )),
        update_habit: Arc::new(UpdateHabitHandler::new(
            repositories.habit.clone(),
            streaks.clone(),
            clock.clone(),
        )),
        delete_habit: Arc::new(DeleteHabitHandler::new(repositories.habit.clone())),
        habit_completion: Arc::new(HabitCompletionHandler::new(
            repositories.habit.clone(),
            repositories.completion.clone(),
            streaks.clone(),
            clock.clone(),
        )),
        create_task: Arc::new(CreateTaskHandler::new(repositories.task.clone(), clock.clone())),
        update_task: Arc::new(UpdateTaskHandler::new(repositories.task.clone(), clock.clone())),
        delete_task: Arc::new(DeleteTaskHandler::new(repositories.task.clone())),
        set_task_completion: Arc::new(SetTaskCompletionHandler::new(
            repositories.task.clone(),
            clock.clone(),
        )),
        log_mood: Arc::new(LogMoodHandler::new(repositories.mood.clone(), clock.clone())),
        delete_mood_log: Arc::new(DeleteMoodLogHandler::new(repositories.mood.clone())),
        update_preferences: Arc::new(UpdatePreferencesHandler::new(
            repositories.notification.clone(),
        )),
        snooze_notification: Arc::new(SnoozeNotificationHandler::new(
            repositories.notification.clone(),
            clock.clone(),
        )),
        register_user: Arc::new(RegisterUserHandler::new(
            repositories.user.clone(),
            clock.clone(),
        )),
        update_profile: Arc::new(UpdateProfileHandler::new(
            repositories.user.clone(),
            clock.clone(),
        )),
    };
    info!("✓ Command handlers initialized");

    let queries = Queries {
        habit: Arc::new(HabitQueries::new(
            repositories.habit.clone(),
            repositories.completion.clone(),
            streaks.clone(),
            clock.clone(),
        )),
        task: Arc::new(TaskQueries::new(repositories.task.clone(), clock.clone())),
        mood: Arc::new(MoodQueries::new(repositories.mood.clone(), clock.clone())),
        analytics: Arc::new(AnalyticsQueries::new(
            repositories.habit.clone(),
            repositories.completion.clone(),
            repositories.task.clone(),
            repositories.mood.clone(),
            streaks.clone(),
            clock.clone(),
        )),
        notification: Arc::new(NotificationQueries::new(
            repositories.notification.clone(),
            repositories.habit.clone(),
            repositories.task.clone(),
            streaks,
            clock.clone(),
        )),
        user: Arc::new(UserQueries::new(repositories.user.clone())),
    };
    info!("✓ Query services initialized");

    Arc::new(AppState {
        environment,
        clock,
        repositories,
        queries,
        command_handlers,
    })
}
