mod analytics_queries;
mod habit_queries;
mod mood_queries;
mod notification_queries;
mod task_queries;
mod user_queries;


pub use analytics_queries::AnalyticsQueries;
pub use habit_queries::HabitQueries;
pub use mood_queries::MoodQueries;
pub use notification_queries::NotificationQueries;
pub use task_queries::TaskQueries;
pub use user_queries::UserQueries;
