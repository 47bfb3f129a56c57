mod aggregate;
mod completion;
mod repository;
mod value_objects;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{Habit, DEFAULT_TARGET_PER_WEEK};
pub use completion::HabitCompletion;
pub use repository::{HabitCompletionRepository, HabitRepository};
pub use value_objects::{parse_weekday, weekday_key, Frequency};
