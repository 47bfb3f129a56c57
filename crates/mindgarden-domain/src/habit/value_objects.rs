use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Short lowercase key used on the wire and in storage ("mon".."sun").
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

/// Accepts "mon", "Monday", "MON" or an ISO weekday number "1".."7".
pub fn parse_weekday(value: &str) -> Result<Weekday, DomainError> {
    let lowered = value.trim().to_lowercase();

    if let Ok(number) = lowered.parse::<u8>() {
        return match number {
            1..=7 => Ok(WEEK[(number - 1) as usize]),
            _ => Err(DomainError::Validation(format!(
                "Weekday number out of range: {number}"
            ))),
        };
    }

    WEEK.iter()
        .copied()
        .find(|day| lowered.len() >= 3 && weekday_name(*day).starts_with(&lowered))
        .ok_or_else(|| DomainError::Validation(format!("Unknown weekday: {value:?}")))
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Days of the week a habit is scheduled on. Empty means every day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Frequency(Vec<Weekday>);

impl Frequency {
    pub fn every_day() -> Self {
        Self(Vec::new())
    }

    pub fn parse<S: AsRef<str>>(days: &[S]) -> Result<Self, DomainError> {
        let mut parsed = Vec::with_capacity(days.len());
        for day in days {
            let weekday = parse_weekday(day.as_ref())?;
            if !parsed.contains(&weekday) {
                parsed.push(weekday);
            }
        }
        parsed.sort_by_key(|d: &Weekday| d.num_days_from_monday());
        Ok(Self(parsed))
    }

    pub fn includes(&self, day: Weekday) -> bool {
        self.0.is_empty() || self.0.contains(&day)
    }

    pub fn is_every_day(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> &[Weekday] {
        &self.0
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.iter().map(|d| weekday_key(*d).to_string()).collect()
    }
}

impl TryFrom<Vec<String>> for Frequency {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Frequency::parse(&value)
    }
}

impl From<Frequency> for Vec<String> {
    fn from(value: Frequency) -> Self {
        value.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday_forms() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("Tuesday").unwrap(), Weekday::Tue);
        assert_eq!(parse_weekday("SUN").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("7").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("1").unwrap(), Weekday::Mon);
    }

    #[test]
    fn test_parse_weekday_rejects_unknown() {
        assert!(parse_weekday("mo").is_err());
        assert!(parse_weekday("0").is_err());
        assert!(parse_weekday("8").is_err());
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn test_frequency_sorts_and_dedups() {
        let freq = Frequency::parse(&["fri", "mon", "friday", "wed"]).unwrap();
        assert_eq!(freq.keys(), vec!["mon", "wed", "fri"]);
    }

    #[test]
    fn test_empty_frequency_means_every_day() {
        let freq = Frequency::every_day();
        assert!(freq.is_every_day());
        for day in WEEK {
            assert!(freq.includes(day));
        }
    }

    #[test]
    fn test_frequency_includes_only_scheduled_days() {
        let freq = Frequency::parse(&["sat", "sun"]).unwrap();
        assert!(freq.includes(Weekday::Sat));
        assert!(!freq.includes(Weekday::Mon));
    }
}
