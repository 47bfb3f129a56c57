//! Scoring rules behind the dashboard, weekly report and scoreboard.
//!
//! Everything here is pure: callers gather counts from repositories and pass them in.

mod garden;
mod insights;
mod mood_stats;
mod period;
mod scoring;

pub use garden::{GardenHealth, GardenStatus};
pub use insights::{dashboard_insights, mood_insights, DashboardSignals};
pub use mood_stats::MoodStats;
pub use period::{iso_week_key, month_range, months_back, trailing_days, week_of, DateRange};
pub use scoring::{activity_score, completion_rate, percentage_change, round2, Rank};
