use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::shared::{Clock, DomainError};

/// The timezone a user's "today" is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserTimezone(Tz);

impl UserTimezone {
    pub const UTC: UserTimezone = UserTimezone(chrono_tz::UTC);

    /// Strict parse used when a user sets their timezone.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(Self::UTC);
        }

        Tz::from_str(trimmed)
            .map(UserTimezone)
            .map_err(|_| DomainError::Validation(format!("Unknown timezone: {trimmed}")))
    }

    /// Lenient parse for stored values; anything unknown is treated as UTC.
    pub fn parse_or_utc(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::UTC)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// The reference date used for current streaks and "today" views.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.date_of(clock.now())
    }

    /// First instant of `date` in this timezone. A midnight skipped by a DST jump resolves to
    /// the same wall-clock time read as UTC.
    pub fn day_start_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        self.0
            .from_local_datetime(&midnight)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| midnight.and_utc())
    }

    /// Half-open UTC window `[start of first, start of the day after last)`.
    pub fn utc_window(&self, first: NaiveDate, last: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let after = last.checked_add_days(Days::new(1)).unwrap_or(last);
        (self.day_start_utc(first), self.day_start_utc(after))
    }
}

impl Default for UserTimezone {
    fn default() -> Self {
        Self::UTC
    }
}
