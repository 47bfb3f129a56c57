pub mod command_handler;
pub mod habit_commands;
pub mod handlers;
pub mod mood_commands;
pub mod notification_commands;
pub mod task_commands;
pub mod user_commands;

pub use command_handler::{Command, CommandHandler};
