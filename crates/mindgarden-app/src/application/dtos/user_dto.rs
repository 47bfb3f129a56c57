use serde::{Deserialize, Serialize};

use crate::application::utils::format_timestamp;
use mindgarden_domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub timezone: String,
    pub created_at: String,
    pub last_seen_at: Option<String>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            email: user.email().to_string(),
            name: user.name().to_string(),
            timezone: user.timezone_name().to_string(),
            created_at: format_timestamp(user.created_at()),
            last_seen_at: user.last_seen_at().map(format_timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserInput {
    pub email: String,
    pub name: String,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub timezone: Option<String>,
}
