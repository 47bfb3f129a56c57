mod calculator;
pub mod ingest;


pub use calculator::{compute_streak_summary, compute_streaks, StreakResult, StreakSummary};
pub use ingest::{normalize_dates, normalize_dates_lossy, parse_date_text, RawDate};
