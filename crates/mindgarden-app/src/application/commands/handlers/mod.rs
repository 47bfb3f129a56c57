mod habit_handlers;
mod mood_handlers;
mod notification_handlers;
mod task_handlers;
mod user_handlers;

#[cfg(test)]
mod tests;

pub use habit_handlers::{
    CreateHabitHandler, DeleteHabitHandler, HabitCompletionHandler, UpdateHabitHandler,
};
pub use mood_handlers::{DeleteMoodLogHandler, LogMoodHandler};
pub use notification_handlers::{SnoozeNotificationHandler, UpdatePreferencesHandler};
pub use task_handlers::{
    CreateTaskHandler, DeleteTaskHandler, SetTaskCompletionHandler, UpdateTaskHandler,
};
pub use user_handlers::{RegisterUserHandler, UpdateProfileHandler};
