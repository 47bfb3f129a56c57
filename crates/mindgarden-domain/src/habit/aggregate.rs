use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Frequency;
use crate::shared::{DomainError, HabitId, UserId};

pub const DEFAULT_TARGET_PER_WEEK: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    frequency: Frequency,
    target_per_week: u8,
    category: Option<String>,
    target_days: Vec<u8>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Habit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        name: String,
        description: Option<String>,
        frequency: Frequency,
        target_per_week: Option<u8>,
        category: Option<String>,
        target_days: Option<Vec<u8>>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = validate_name(&name)?;
        let target_per_week =
            validate_target_per_week(target_per_week.unwrap_or(DEFAULT_TARGET_PER_WEEK))?;
        let target_days = validate_target_days(target_days.unwrap_or_default())?;

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            description: normalize_optional(description),
            frequency,
            target_per_week,
            category: normalize_optional(category),
            target_days,
            is_active: true,
            created_at: now,
            updated_at: None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        description: Option<String>,
        frequency: Frequency,
        target_per_week: u8,
        category: Option<String>,
        target_days: Vec<u8>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            frequency,
            target_per_week,
            category,
            target_days,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    pub fn target_per_week(&self) -> u8 {
        self.target_per_week
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn target_days(&self) -> &[u8] {
        &self.target_days
    }

    /// Completions expected in a Monday..Sunday week.
    pub fn weekly_target(&self) -> u32 {
        if self.target_days.is_empty() {
            7
        } else {
            self.target_days.len() as u32
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        self.frequency.includes(date.weekday())
    }

    pub fn rename(&mut self, name: String, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.name = validate_name(&name)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn describe(&mut self, description: Option<String>, now: DateTime<Utc>) {
        self.description = normalize_optional(description);
        self.updated_at = Some(now);
    }

    pub fn reschedule(&mut self, frequency: Frequency, now: DateTime<Utc>) {
        self.frequency = frequency;
        self.updated_at = Some(now);
    }

    pub fn set_target_per_week(
        &mut self,
        target: u8,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.target_per_week = validate_target_per_week(target)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn categorize(&mut self, category: Option<String>, now: DateTime<Utc>) {
        self.category = normalize_optional(category);
        self.updated_at = Some(now);
    }

    pub fn set_target_days(
        &mut self,
        days: Vec<u8>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.target_days = validate_target_days(days)?;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn set_active(&mut self, active: bool, now: DateTime<Utc>) {
        self.is_active = active;
        self.updated_at = Some(now);
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn validate_target_per_week(target: u8) -> Result<u8, DomainError> {
    if !(1..=7).contains(&target) {
        return Err(DomainError::Validation(format!(
            "target_per_week must be between 1 and 7, got {target}"
        )));
    }
    Ok(target)
}

fn validate_target_days(mut days: Vec<u8>) -> Result<Vec<u8>, DomainError> {
    if let Some(bad) = days.iter().find(|d| !(1..=7).contains(*d)) {
        return Err(DomainError::Validation(format!(
            "target_days entries must be ISO weekdays 1..=7, got {bad}"
        )));
    }
    days.sort_unstable();
    days.dedup();
    Ok(days)
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
