mod ownership;
mod streak_reader;

pub use ownership::{owned_habit, owned_task};
pub use streak_reader::StreakReader;
