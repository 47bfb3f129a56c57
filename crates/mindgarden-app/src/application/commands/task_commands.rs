use crate::application::commands::command_handler::Command;
use crate::application::context::UserContext;
use crate::application::dtos::{CreateTaskInput, MessageDto, TaskDto, UpdateTaskInput};

#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub context: UserContext,
    pub input: CreateTaskInput,
}

impl Command for CreateTaskCommand {}

pub type CreateTaskResult = TaskDto;

#[derive(Debug, Clone)]
pub struct UpdateTaskCommand {
    pub context: UserContext,
    pub task_id: String,
    pub input: UpdateTaskInput,
}

impl Command for UpdateTaskCommand {}

pub type UpdateTaskResult = TaskDto;

#[derive(Debug, Clone)]
pub struct DeleteTaskCommand {
    pub context: UserContext,
    pub task_id: String,
}

impl Command for DeleteTaskCommand {}

pub type DeleteTaskResult = MessageDto;

/// `completed: false` reopens the task as pending.
#[derive(Debug, Clone)]
pub struct SetTaskCompletionCommand {
    pub context: UserContext,
    pub task_id: String,
    pub completed: bool,
}

impl Command for SetTaskCompletionCommand {}

pub type SetTaskCompletionResult = TaskDto;
