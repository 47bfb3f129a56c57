use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::utils::{format_date, format_timestamp};
use mindgarden_domain::habit::Habit;
use mindgarden_domain::streak::StreakSummary;

/// A habit together with the progress figures every habit view shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Vec<String>,
    pub target_per_week: u8,
    pub category: Option<String>,
    pub target_days: Vec<u8>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Same as `current_streak`; older clients read this key.
    pub streak: u32,
    pub total_completions: u32,
    pub completed_today: bool,
    pub completions_this_week: u32,
}

/// Completion figures for one habit as of a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitProgress {
    pub summary: StreakSummary,
    pub completed_today: bool,
    pub completions_this_week: u32,
}

impl HabitDto {
    pub fn new(habit: &Habit, progress: HabitProgress) -> Self {
        let streak = progress.summary.streak;
        Self {
            id: habit.id().as_str().to_string(),
            name: habit.name().to_string(),
            description: habit.description().map(str::to_string),
            frequency: habit.frequency().keys(),
            target_per_week: habit.target_per_week(),
            category: habit.category().map(str::to_string),
            target_days: habit.target_days().to_vec(),
            is_active: habit.is_active(),
            created_at: format_timestamp(habit.created_at()),
            updated_at: habit.updated_at().map(format_timestamp),
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
            streak: streak.current_streak,
            total_completions: progress.summary.total_days,
            completed_today: progress.completed_today,
            completions_this_week: progress.completions_this_week,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Vec<String>,
    pub target_per_week: Option<u8>,
    pub category: Option<String>,
    pub target_days: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabitInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<Vec<String>>,
    pub target_per_week: Option<u8>,
    pub category: Option<String>,
    pub target_days: Option<Vec<u8>>,
    pub is_active: Option<bool>,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogHabitInput {
    pub date: Option<String>,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

impl Default for LogHabitInput {
    fn default() -> Self {
        Self {
            date: None,
            completed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLogResultDto {
    pub message: String,
    pub habit_id: String,
    pub date: String,
    pub completed: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCompletionDto {
    pub message: String,
    pub habit_id: String,
    pub completion_date: String,
    pub completed_at: String,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitUncompleteDto {
    pub message: String,
    pub habit_id: String,
    pub date: String,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// One bar of the seven-day completion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStatDto {
    pub day: String, // Mon..Sun
    pub date: String,
    pub completed: u32,
    pub total: u32,
}

impl WeeklyStatDto {
    pub fn new(date: NaiveDate, completed: u32, total: u32) -> Self {
        Self {
            day: date.format("%a").to_string(),
            date: format_date(date),
            completed,
            total,
        }
    }
}
