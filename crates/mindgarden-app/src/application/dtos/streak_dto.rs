use serde::{Deserialize, Serialize};

use crate::application::utils::format_date;
use mindgarden_domain::habit::Habit;
use mindgarden_domain::streak::{StreakResult, StreakSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStreakDto {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completion_days: u32,
    pub last_completion_date: Option<String>, // YYYY-MM-DD
}

impl HabitStreakDto {
    pub fn new(habit: &Habit, summary: &StreakSummary) -> Self {
        Self {
            habit_id: habit.id().as_str().to_string(),
            habit_name: habit.name().to_string(),
            current_streak: summary.streak.current_streak,
            longest_streak: summary.streak.longest_streak,
            total_completion_days: summary.total_days,
            last_completion_date: summary.last_date.map(format_date),
        }
    }
}

/// Streak across every habit a user has, treating any completion as activity for the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl From<StreakResult> for UserStreakDto {
    fn from(streak: StreakResult) -> Self {
        Self {
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
        }
    }
}
