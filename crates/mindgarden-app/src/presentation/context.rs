use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use log::debug;

use super::error::ApiError;
use super::state::SharedState;
use crate::application::UserContext;
use mindgarden_domain::shared::UserId;

/// Identity header set by the gateway in front of the service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the caller from `X-User-Id`. The user must have registered a profile; their
/// stored timezone decides what "today" means for the request.
impl FromRequestParts<SharedState> for UserContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?;

        let user_id = UserId::from_string(raw);
        let user = state
            .repositories
            .user
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                debug!("[auth] unknown user_id={}", raw);
                ApiError::unauthorized("Unknown user")
            })?;

        Ok(UserContext::new(user_id, user.timezone()))
    }
}
