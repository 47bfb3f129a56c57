use chrono::NaiveDate;

use mindgarden_domain::shared::{Clock, UserId};
use mindgarden_domain::user::UserTimezone;

/// Caller identity resolved once per request and passed to every command and query.
#[derive(Debug, Clone, PartialEq)]
pub struct UserContext {
    pub user_id: UserId,
    pub timezone: UserTimezone,
}

impl UserContext {
    pub fn new(user_id: UserId, timezone: UserTimezone) -> Self {
        Self { user_id, timezone }
    }

    /// Reference date for streaks and day windows.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.timezone.today(clock)
    }
}
