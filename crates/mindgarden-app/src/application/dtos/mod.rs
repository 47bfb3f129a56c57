mod analytics_dto;
mod habit_dto;
mod mood_dto;
mod notification_dto;
mod streak_dto;
mod task_dto;
mod user_dto;

pub use analytics_dto::*;
pub use habit_dto::*;
pub use mood_dto::*;
pub use notification_dto::*;
pub use streak_dto::*;
pub use task_dto::*;
pub use user_dto::*;

use serde::{Deserialize, Serialize};

/// Acknowledgement body for writes that return nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
