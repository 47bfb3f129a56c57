mod completion_repo;
mod habit_repo;
mod mood_repo;
mod notification_repo;
mod task_repo;
mod user_repo;

pub use completion_repo::SqliteHabitCompletionRepository;
pub use habit_repo::SqliteHabitRepository;
pub use mood_repo::SqliteMoodLogRepository;
pub use notification_repo::SqliteNotificationRepository;
pub use task_repo::SqliteTaskRepository;
pub use user_repo::SqliteUserRepository;
