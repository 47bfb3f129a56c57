use crate::application::commands::command_handler::Command;
use crate::application::context::UserContext;
use crate::application::dtos::{RegisterUserInput, UpdateProfileInput, UserDto};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub input: RegisterUserInput,
}

impl Command for RegisterUserCommand {}

pub type RegisterUserResult = UserDto;

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub context: UserContext,
    pub input: UpdateProfileInput,
}

impl Command for UpdateProfileCommand {}

pub type UpdateProfileResult = UserDto;
