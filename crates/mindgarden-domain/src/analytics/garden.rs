use serde::Serialize;

use super::scoring::round2;

const HABIT_WEIGHT: f64 = 0.4;
const TASK_WEIGHT: f64 = 0.3;
const MOOD_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GardenStatus {
    Flourishing,
    Growing,
    Budding,
    NeedsCare,
}

impl GardenStatus {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => GardenStatus::Flourishing,
            s if s >= 60.0 => GardenStatus::Growing,
            s if s >= 40.0 => GardenStatus::Budding,
            _ => GardenStatus::NeedsCare,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GardenStatus::Flourishing => "Your garden is in full bloom! 🌸",
            GardenStatus::Growing => "Your garden is growing well! 🌱",
            GardenStatus::Budding => "Your garden is starting to bud! 🌿",
            GardenStatus::NeedsCare => "Your garden needs some care! 🌱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenComponents {
    pub habits: f64,
    pub tasks: f64,
    pub mood: f64,
}

/// Weighted blend of habit rate, task rate and mood into one 0..=100 score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenHealth {
    pub overall_score: f64,
    pub status: GardenStatus,
    pub description: String,
    pub components: GardenComponents,
}

impl GardenHealth {
    /// `habit_rate` and `task_rate` are percentages; `average_mood` is on the 1..=5 scale (0 when unknown).
    pub fn evaluate(habit_rate: f64, task_rate: f64, average_mood: f64) -> Self {
        let mood_pct = if average_mood > 0.0 {
            average_mood / 5.0 * 100.0
        } else {
            0.0
        };
        let overall = habit_rate * HABIT_WEIGHT + task_rate * TASK_WEIGHT + mood_pct * MOOD_WEIGHT;
        let status = GardenStatus::from_score(overall);

        Self {
            overall_score: round2(overall),
            status,
            description: status.description().to_string(),
            components: GardenComponents {
                habits: round2(habit_rate),
                tasks: round2(task_rate),
                mood: round2(mood_pct),
            },
        }
    }
}
