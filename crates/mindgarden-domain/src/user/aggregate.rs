use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserTimezone;
use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    timezone: String,
    created_at: DateTime<Utc>,
    last_seen_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        email: String,
        name: String,
        timezone: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let email = normalize_email(&email)?;
        let name = validate_name(&name)?;
        let timezone = match timezone {
            Some(tz) => UserTimezone::parse(&tz)?.name().to_string(),
            None => UserTimezone::UTC.name().to_string(),
        };

        Ok(Self {
            id: UserId::new(),
            email,
            name,
            timezone,
            created_at: now,
            last_seen_at: None,
        })
    }

    pub fn restore(
        id: UserId,
        email: String,
        name: String,
        timezone: String,
        created_at: DateTime<Utc>,
        last_seen_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            timezone,
            created_at,
            last_seen_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone_name(&self) -> &str {
        &self.timezone
    }

    pub fn timezone(&self) -> UserTimezone {
        UserTimezone::parse_or_utc(&self.timezone)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_seen_at(&self) -> Option<DateTime<Utc>> {
        self.last_seen_at
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        self.name = validate_name(&name)?;
        Ok(())
    }

    pub fn change_timezone(&mut self, timezone: &str) -> Result<(), DomainError> {
        self.timezone = UserTimezone::parse(timezone)?.name().to_string();
        Ok(())
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen_at = Some(now);
    }
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::Validation(format!(
            "Invalid email address: {email:?}"
        )));
    }
    Ok(email)
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "User name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_normalizes_fields() {
        let user = User::new(
            "  Ada@Example.COM ".to_string(),
            " Ada ".to_string(),
            Some("Europe/London".to_string()),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.timezone_name(), "Europe/London");
        assert!(user.last_seen_at().is_none());
    }

    #[test]
    fn test_default_timezone_is_utc() {
        let user = User::new("a@b.c".into(), "A".into(), None, Utc::now()).unwrap();
        assert_eq!(user.timezone(), UserTimezone::UTC);
    }

    #[test]
    fn test_rejects_invalid_email_and_name() {
        assert!(User::new("nope".into(), "A".into(), None, Utc::now()).is_err());
        assert!(User::new("a@b.c".into(), "   ".into(), None, Utc::now()).is_err());
    }

    #[test]
    fn test_change_timezone_validates() {
        let mut user = User::new("a@b.c".into(), "A".into(), None, Utc::now()).unwrap();
        assert!(user.change_timezone("Nowhere/City").is_err());
        assert_eq!(user.timezone_name(), "UTC");

        user.change_timezone("Asia/Tokyo").unwrap();
        assert_eq!(user.timezone_name(), "Asia/Tokyo");
    }
}
