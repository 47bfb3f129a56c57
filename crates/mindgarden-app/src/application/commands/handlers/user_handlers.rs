use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserDto;
use mindgarden_domain::shared::{Clock, DomainError};
use mindgarden_domain::user::{User, UserRepository};

pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserHandler {
    type Result = RegisterUserResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        let input = cmd.input;
        let user = User::new(input.email, input.name, input.timezone, self.clock.now())?;

        if self.user_repo.find_by_email(user.email()).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "A user with email {} already exists",
                user.email()
            )));
        }

        self.user_repo.save(&user).await?;
        info!(
            "[user] registered user_id={} timezone={}",
            user.id(),
            user.timezone_name()
        );

        Ok(UserDto::from(&user))
    }
}

pub struct UpdateProfileHandler {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateProfileHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

#[async_trait]
impl CommandHandler<UpdateProfileCommand> for UpdateProfileHandler {
    type Result = UpdateProfileResult;

    async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Self::Result, DomainError> {
        let mut user = self
            .user_repo
            .find_by_id(&cmd.context.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("User {} not found", cmd.context.user_id))
            })?;

        if let Some(name) = cmd.input.name {
            user.rename(name)?;
        }
        if let Some(timezone) = cmd.input.timezone {
            user.change_timezone(&timezone)?;
        }
        user.touch(self.clock.now());

        self.user_repo.save(&user).await?;
        info!(
            "[user] profile updated user_id={} timezone={}",
            user.id(),
            user.timezone_name()
        );

        Ok(UserDto::from(&user))
    }
}
