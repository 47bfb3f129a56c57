use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeSet;

use crate::shared::DomainError;

/// A completion date as it arrives from storage or a request body, before it is
/// reduced to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDate {
    Text(String),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        RawDate::Text(value.to_string())
    }
}

impl From<String> for RawDate {
    fn from(value: String) -> Self {
        RawDate::Text(value)
    }
}

impl From<DateTime<Utc>> for RawDate {
    fn from(value: DateTime<Utc>) -> Self {
        RawDate::Timestamp(value)
    }
}

impl From<NaiveDate> for RawDate {
    fn from(value: NaiveDate) -> Self {
        RawDate::Date(value)
    }
}

impl RawDate {
    /// Reduce to a calendar day.
    ///
    /// Timestamps keep the day they were written with; no timezone shift is applied.
    pub fn normalize(&self) -> Result<NaiveDate, DomainError> {
        match self {
            RawDate::Date(date) => Ok(*date),
            RawDate::Timestamp(ts) => Ok(ts.date_naive()),
            RawDate::Text(text) => parse_date_text(text),
        }
    }
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive ISO date-time.
pub fn parse_date_text(text: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.date());
        }
    }

    Err(DomainError::InvalidInput(format!(
        "Unrecognized date value: {trimmed:?}"
    )))
}

/// Normalize every raw value, failing on the first malformed one.
pub fn normalize_dates<I>(raws: I) -> Result<BTreeSet<NaiveDate>, DomainError>
where
    I: IntoIterator<Item = RawDate>,
{
    raws.into_iter().map(|raw| raw.normalize()).collect()
}

/// Normalize what can be normalized; malformed values are returned for the caller to report.
pub fn normalize_dates_lossy<I>(raws: I) -> (BTreeSet<NaiveDate>, Vec<String>)
where
    I: IntoIterator<Item = RawDate>,
{
    let mut dates = BTreeSet::new();
    let mut rejected = Vec::new();

    for raw in raws {
        match raw.normalize() {
            Ok(date) => {
                dates.insert(date);
            }
            Err(err) => rejected.push(err.message().to_string()),
        }
    }

    (dates, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_iso_date() {
        assert_eq!(parse_date_text("2024-01-03").unwrap(), ymd(2024, 1, 3));
        assert_eq!(parse_date_text("  2024-01-03 ").unwrap(), ymd(2024, 1, 3));
    }

    #[test]
    fn test_rfc3339_keeps_written_day() {
        assert_eq!(
            parse_date_text("2024-01-03T23:30:00Z").unwrap(),
            ymd(2024, 1, 3)
        );
        assert_eq!(
            parse_date_text("2024-01-03T00:15:00+09:00").unwrap(),
            ymd(2024, 1, 3)
        );
    }

    #[test]
    fn test_naive_datetime_variants() {
        assert_eq!(
            parse_date_text("2024-01-03T00:00:00").unwrap(),
            ymd(2024, 1, 3)
        );
        assert_eq!(
            parse_date_text("2024-01-03 08:00:00.123").unwrap(),
            ymd(2024, 1, 3)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_date_text("yesterday"),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(parse_date_text("2024-13-01").is_err());
        assert!(parse_date_text("").is_err());
    }

    #[test]
    fn test_mixed_encodings_collapse_to_one_day() {
        let raws = vec![
            RawDate::from("2024-01-03"),
            RawDate::from("2024-01-03T07:00:00"),
            RawDate::from(Utc.with_ymd_and_hms(2024, 1, 3, 18, 0, 0).unwrap()),
            RawDate::from(ymd(2024, 1, 3)),
        ];

        let dates = normalize_dates(raws).unwrap();
        assert_eq!(dates.len(), 1);
        assert!(dates.contains(&ymd(2024, 1, 3)));
    }

    #[test]
    fn test_strict_normalization_fails_on_first_bad_value() {
        let raws = vec![RawDate::from("2024-01-03"), RawDate::from("not-a-date")];
        assert!(normalize_dates(raws).is_err());
    }

    #[test]
    fn test_lossy_normalization_reports_rejects() {
        let raws = vec![
            RawDate::from("2024-01-02"),
            RawDate::from("n/a"),
            RawDate::from("2024-01-03"),
        ];

        let (dates, rejected) = normalize_dates_lossy(raws);
        assert_eq!(dates.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].contains("n/a"));
    }
}
