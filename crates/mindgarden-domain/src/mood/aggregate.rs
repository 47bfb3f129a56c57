use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EnergyLevel, MoodLevel, MoodSource};
use crate::shared::{MoodLogId, UserId};

/// A user's mood for one calendar day. Logging again on the same day replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    id: MoodLogId,
    user_id: UserId,
    date: NaiveDate,
    mood: MoodLevel,
    energy: EnergyLevel,
    notes: Option<String>,
    source: MoodSource,
    logged_at: DateTime<Utc>,
}

impl MoodLog {
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        mood: MoodLevel,
        energy: EnergyLevel,
        notes: Option<String>,
        source: MoodSource,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MoodLogId::new(),
            user_id,
            date,
            mood,
            energy,
            notes,
            source,
            logged_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: MoodLogId,
        user_id: UserId,
        date: NaiveDate,
        mood: MoodLevel,
        energy: EnergyLevel,
        notes: Option<String>,
        source: MoodSource,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            date,
            mood,
            energy,
            notes,
            source,
            logged_at,
        }
    }

    pub fn id(&self) -> &MoodLogId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mood(&self) -> MoodLevel {
        self.mood
    }

    pub fn energy(&self) -> EnergyLevel {
        self.energy
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn source(&self) -> MoodSource {
        self.source
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}
