mod aggregate;
mod repository;
mod value_objects;

pub use aggregate::MoodLog;
pub use repository::MoodLogRepository;
pub use value_objects::{EnergyLevel, MoodLevel, MoodSource};
