use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    VeryLow,
    Low,
    Neutral,
    Good,
    VeryGood,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VeryLow,
        MoodLevel::Low,
        MoodLevel::Neutral,
        MoodLevel::Good,
        MoodLevel::VeryGood,
    ];

    /// 1 (very_low) through 5 (very_good).
    pub fn score(&self) -> u8 {
        match self {
            MoodLevel::VeryLow => 1,
            MoodLevel::Low => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Good => 4,
            MoodLevel::VeryGood => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "very_low",
            MoodLevel::Low => "low",
            MoodLevel::Neutral => "neutral",
            MoodLevel::Good => "good",
            MoodLevel::VeryGood => "very_good",
        }
    }
}

impl FromStr for MoodLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| DomainError::Validation(format!("Unknown mood level: {s}")))
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported energy, 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnergyLevel(u8);

impl EnergyLevel {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::Validation(format!(
                "energy must be between 1 and 5, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for EnergyLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EnergyLevel::new(value)
    }
}

impl From<EnergyLevel> for u8 {
    fn from(value: EnergyLevel) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodSource {
    #[default]
    Text,
    Voice,
}

impl MoodSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodSource::Text => "text",
            MoodSource::Voice => "voice",
        }
    }
}

impl FromStr for MoodSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(MoodSource::Text),
            "voice" => Ok(MoodSource::Voice),
            other => Err(DomainError::Validation(format!(
                "Unknown mood source: {other}"
            ))),
        }
    }
}
