// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod analytics;
pub mod habit;
pub mod mood;
pub mod notification;
pub mod shared;
pub mod streak;
pub mod task;
pub mod user;

// Re-exports for convenience
pub use shared::{Clock, DomainError, HabitId, SystemClock, TaskId, UserId};
pub use streak::{compute_streaks, StreakResult};
