use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CompletionId, HabitId, UserId};

/// One habit done on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCompletion {
    id: CompletionId,
    user_id: UserId,
    habit_id: HabitId,
    date: NaiveDate,
    completed_at: DateTime<Utc>,
}

impl HabitCompletion {
    pub fn new(user_id: UserId, habit_id: HabitId, date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id: CompletionId::new(),
            user_id,
            habit_id,
            date,
            completed_at: now,
        }
    }

    pub fn restore(
        id: CompletionId,
        user_id: UserId,
        habit_id: HabitId,
        date: NaiveDate,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            habit_id,
            date,
            completed_at,
        }
    }

    pub fn id(&self) -> &CompletionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
