use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::utils::{format_date, format_timestamp};
use mindgarden_domain::mood::MoodLog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogDto {
    pub id: String,
    pub date: String,
    pub mood: String,
    pub mood_score: u8,
    pub energy: u8,
    pub notes: Option<String>,
    pub source: String,
    pub logged_at: String,
}

impl From<&MoodLog> for MoodLogDto {
    fn from(log: &MoodLog) -> Self {
        Self {
            id: log.id().as_str().to_string(),
            date: format_date(log.date()),
            mood: log.mood().to_string(),
            mood_score: log.mood().score(),
            energy: log.energy().value(),
            notes: log.notes().map(str::to_string),
            source: log.source().as_str().to_string(),
            logged_at: format_timestamp(log.logged_at()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMoodInput {
    pub mood: String,
    pub energy: u8,
    pub notes: Option<String>,
    pub source: Option<String>,
}

/// `days` counts back from today; an explicit `start_date`/`end_date` pair takes precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodLogsParams {
    pub days: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTimelineEntryDto {
    pub date: String,
    pub mood: Option<String>,
    pub energy: Option<u8>,
    pub notes: Option<String>,
    pub has_log: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTimelineDto {
    pub timeline: Vec<MoodTimelineEntryDto>,
    pub start_date: String,
    pub end_date: String,
    pub total_days: u32,
    pub logged_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodAnalyticsDto {
    pub period_days: u32,
    pub total_logs: u32,
    pub average_mood_score: f64,
    pub average_energy: f64,
    pub mood_distribution: BTreeMap<String, u32>,
    /// Keyed by energy level rendered as a string ("1".."5").
    pub energy_distribution: BTreeMap<String, u32>,
    pub insights: Vec<String>,
    pub logging_consistency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTodayDto {
    pub has_log: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_log: Option<MoodLogDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTrendPointDto {
    pub week: String, // YYYY-Www
    pub average_mood: f64,
    pub average_energy: f64,
    pub log_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTrendsDto {
    pub trends: Vec<MoodTrendPointDto>,
    pub period: String,
}
