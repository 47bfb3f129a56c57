use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    AnalyticsQueries, HabitQueries, MoodQueries, NotificationQueries, TaskQueries, UserQueries,
};
use mindgarden_domain::habit::{HabitCompletionRepository, HabitRepository};
use mindgarden_domain::mood::MoodLogRepository;
use mindgarden_domain::notification::NotificationRepository;
use mindgarden_domain::shared::Clock;
use mindgarden_domain::task::TaskRepository;
use mindgarden_domain::user::UserRepository;
use mindgarden_infrastructure::config::Environment;

/// Command handlers container
pub struct CommandHandlers {
    pub create_habit: Arc<CreateHabitHandler>,
    pub update_habit: Arc<UpdateHabitHandler>,
    pub delete_habit: Arc<DeleteHabitHandler>,
    pub habit_completion: Arc<HabitCompletionHandler>,
    pub create_task: Arc<CreateTaskHandler>,
    pub update_task: Arc<UpdateTaskHandler>,
    pub delete_task: Arc<DeleteTaskHandler>,
    pub set_task_completion: Arc<SetTaskCompletionHandler>,
    pub log_mood: Arc<LogMoodHandler>,
    pub delete_mood_log: Arc<DeleteMoodLogHandler>,
    pub update_preferences: Arc<UpdatePreferencesHandler>,
    pub snooze_notification: Arc<SnoozeNotificationHandler>,
    pub register_user: Arc<RegisterUserHandler>,
    pub update_profile: Arc<UpdateProfileHandler>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub habit: Arc<dyn HabitRepository>,
    pub completion: Arc<dyn HabitCompletionRepository>,
    pub task: Arc<dyn TaskRepository>,
    pub mood: Arc<dyn MoodLogRepository>,
    pub notification: Arc<dyn NotificationRepository>,
}

pub struct Queries {
    pub habit: Arc<HabitQueries>,
    pub task: Arc<TaskQueries>,
    pub mood: Arc<MoodQueries>,
    pub analytics: Arc<AnalyticsQueries>,
    pub notification: Arc<NotificationQueries>,
    pub user: Arc<UserQueries>,
}

pub struct AppState {
    pub environment: Environment,
    pub clock: Arc<dyn Clock>,
    pub repositories: Repositories,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

pub type SharedState = Arc<AppState>;
