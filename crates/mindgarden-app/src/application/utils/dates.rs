use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use mindgarden_domain::shared::DomainError;
use mindgarden_domain::streak::parse_date_text;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar day from a path segment or query value.
pub fn parse_day(value: &str) -> Result<NaiveDate, DomainError> {
    parse_date_text(value)
}

/// Due dates accept RFC 3339, a naive date-time read as UTC, or a bare date at UTC midnight.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, DomainError> {
    let trimmed = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(DomainError::InvalidInput(format!("Invalid due_date: {trimmed:?}")))
}

/// Window length from a query string, defaulted and bounds-checked.
pub fn validate_days(
    value: Option<u32>,
    default: u32,
    min: u32,
    max: u32,
) -> Result<u32, DomainError> {
    let days = value.unwrap_or(default);
    if days < min || days > max {
        return Err(DomainError::Validation(format!(
            "days must be between {min} and {max}, got {days}"
        )));
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_due_date_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 3, 9, 30, 0).unwrap();
        assert_eq!(parse_due_date("2024-01-03T09:30:00Z").unwrap(), expected);
        assert_eq!(parse_due_date("2024-01-03T11:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_due_date("2024-01-03T09:30").unwrap(), expected);
        assert_eq!(
            parse_due_date("2024-01-03").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()
        );
        assert!(parse_due_date("tomorrow").is_err());
    }

    #[test]
    fn test_validate_days_bounds() {
        assert_eq!(validate_days(None, 30, 7, 365).unwrap(), 30);
        assert_eq!(validate_days(Some(7), 30, 7, 365).unwrap(), 7);
        assert!(validate_days(Some(6), 30, 7, 365).is_err());
        assert!(validate_days(Some(366), 30, 7, 365).is_err());
    }

    #[test]
    fn test_format_helpers() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 3, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-03T09:30:00Z");
        assert_eq!(format_date(ts.date_naive()), "2024-01-03");
    }
}
