use chrono::NaiveDate;
use mindgarden_domain::shared::DomainError;
use mindgarden_domain::streak::parse_date_text;
use std::str::FromStr;

/// Calendar dates are stored as `YYYY-MM-DD`.
pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn date_from_db(value: &str, column: &str) -> Result<NaiveDate, DomainError> {
    parse_date_text(value)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid {column}: {}", e.message())))
}

pub(crate) fn enum_from_db<T>(value: &str, column: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse().map_err(|e: DomainError| {
        DomainError::DataIntegrity(format!("Invalid {column}: {}", e.message()))
    })
}

pub(crate) fn json_to_db<T: serde::Serialize>(
    value: &T,
    column: &str,
) -> Result<String, DomainError> {
    serde_json::to_string(value)
        .map_err(|e| DomainError::Serialization(format!("Encode {column}: {e}")))
}

pub(crate) fn json_from_db<T: serde::de::DeserializeOwned>(
    value: &str,
    column: &str,
) -> Result<T, DomainError> {
    serde_json::from_str(value)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid {column}: {e}")))
}

pub(crate) fn count_from_db(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
