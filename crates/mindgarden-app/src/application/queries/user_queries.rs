use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::UserDto;
use mindgarden_domain::shared::DomainError;
use mindgarden_domain::user::UserRepository;

pub struct UserQueries {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueries {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn profile(&self, ctx: &UserContext) -> Result<UserDto, DomainError> {
        self.user_repo
            .find_by_id(&ctx.user_id)
            .await?
            .map(|user| UserDto::from(&user))
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", ctx.user_id)))
    }
}
