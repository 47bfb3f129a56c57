use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mindgarden_domain::analytics::GardenHealth;

// ============================================================
// Dashboard
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDto {
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitSummaryDto {
    pub total_active: u32,
    pub completions: u32,
    pub completion_rate: f64,
    pub total_current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummaryDto {
    pub total_created: u32,
    pub completed: u32,
    pub overdue: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodSummaryDto {
    pub logs_count: u32,
    pub average_mood: f64,
    pub average_energy: f64,
    pub logging_consistency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardDto {
    pub period: PeriodDto,
    pub habits: HabitSummaryDto,
    pub tasks: TaskSummaryDto,
    pub mood: MoodSummaryDto,
    pub insights: Vec<String>,
    pub garden_health: GardenHealth,
}

// ============================================================
// Weekly report
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPeriodDto {
    pub start: String,
    pub end: String,
    pub current_week: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitPerformanceDto {
    pub habit_name: String,
    pub completions: u32,
    pub target: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyHabitsDto {
    pub performance: Vec<HabitPerformanceDto>,
    pub total_habits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTasksDto {
    pub created: u32,
    pub completed: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodDayDto {
    pub date: String,
    pub mood: Option<String>,
    pub energy: Option<u8>,
    pub logged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMoodDto {
    /// Keyed by full day name ("Monday".."Sunday").
    pub by_day: BTreeMap<String, MoodDayDto>,
    pub days_logged: u32,
    pub consistency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMoodPointDto {
    pub day: String, // Mon..Sun
    pub mood: u8,
    pub energy: u8,
}

/// The camelCase keys feed the mood chart directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReportDto {
    pub week_period: WeekPeriodDto,
    pub habits: WeeklyHabitsDto,
    pub tasks: WeeklyTasksDto,
    pub mood: WeeklyMoodDto,
    #[serde(rename = "moodStability")]
    pub mood_stability: f64,
    #[serde(rename = "averageMood")]
    pub average_mood: f64,
    #[serde(rename = "averageEnergy")]
    pub average_energy: f64,
    #[serde(rename = "moodVariance")]
    pub mood_variance: f64,
    #[serde(rename = "dailyData")]
    pub daily_data: Vec<DailyMoodPointDto>,
}

// ============================================================
// Monthly trends
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrendDto {
    pub month: String,      // YYYY-MM
    pub month_name: String, // January 2024
    pub habit_completions: u32,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub task_completion_rate: f64,
    pub mood_logs: u32,
    pub average_mood: f64,
    pub average_energy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTrendsDto {
    pub trends: Vec<MonthlyTrendDto>,
    pub period: String,
}

// ============================================================
// Scoreboard
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekActivityDto {
    pub habits: u32,
    pub tasks: u32,
    pub moods: u32,
    pub avg_mood: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityChangeDto {
    pub habits: f64,
    pub tasks: f64,
    pub moods: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityDto {
    pub date: String,
    pub day: String, // Monday..Sunday
    pub habits: u32,
    pub tasks: u32,
    pub moods: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub overall_score: f64,
    pub rank: String,
    pub rank_emoji: String,
    pub this_week: WeekActivityDto,
    pub last_week: WeekActivityDto,
    pub changes: ActivityChangeDto,
    pub daily_breakdown: Vec<DailyActivityDto>,
}
