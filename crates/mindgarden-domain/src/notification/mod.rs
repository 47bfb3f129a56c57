mod aggregate;
mod repository;
mod value_objects;

pub use aggregate::{
    NotificationPreferences, NotificationSnooze, DEFAULT_SNOOZE_MINUTES, MAX_SNOOZE_MINUTES,
};
pub use repository::NotificationRepository;
pub use value_objects::ReminderTime;
