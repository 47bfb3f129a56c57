use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::commands::task_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{
    CreateTaskInput, MessageDto, TaskDto, TaskListParams, TaskOverviewDto, UpdateTaskInput,
};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::{JsonBody, QueryParams};
use crate::presentation::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/today", get(today))
        .route("/overdue", get(overdue))
        .route("/analytics/overview", get(overview))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .route("/{id}/complete", post(complete_task))
        .route("/{id}/uncomplete", post(uncomplete_task))
}

async fn list_tasks(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(params): QueryParams<TaskListParams>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    Ok(Json(state.queries.task.list(&ctx, params).await?))
}

async fn create_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<CreateTaskInput>,
) -> ApiResult<(StatusCode, Json<TaskDto>)> {
    let task = state
        .command_handlers
        .create_task
        .handle(CreateTaskCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn today(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<Vec<TaskDto>>> {
    Ok(Json(state.queries.task.today(&ctx).await?))
}

async fn overdue(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<Vec<TaskDto>>> {
    Ok(Json(state.queries.task.overdue(&ctx).await?))
}

async fn overview(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<TaskOverviewDto>> {
    Ok(Json(state.queries.task.overview(&ctx).await?))
}

async fn get_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(task_id): Path<String>,
) -> ApiResult<Json<TaskDto>> {
    Ok(Json(state.queries.task.get(&ctx, &task_id).await?))
}

async fn update_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(task_id): Path<String>,
    JsonBody(input): JsonBody<UpdateTaskInput>,
) -> ApiResult<Json<TaskDto>> {
    let task = state
        .command_handlers
        .update_task
        .handle(UpdateTaskCommand {
            context: ctx,
            task_id,
            input,
        })
        .await?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(task_id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    let message = state
        .command_handlers
        .delete_task
        .handle(DeleteTaskCommand {
            context: ctx,
            task_id,
        })
        .await?;
    Ok(Json(message))
}

async fn set_completion(
    state: &SharedState,
    ctx: UserContext,
    task_id: String,
    completed: bool,
) -> ApiResult<Json<TaskDto>> {
    let task = state
        .command_handlers
        .set_task_completion
        .handle(SetTaskCompletionCommand {
            context: ctx,
            task_id,
            completed,
        })
        .await?;
    Ok(Json(task))
}

async fn complete_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(task_id): Path<String>,
) -> ApiResult<Json<TaskDto>> {
    set_completion(&state, ctx, task_id, true).await
}

async fn uncomplete_task(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(task_id): Path<String>,
) -> ApiResult<Json<TaskDto>> {
    set_completion(&state, ctx, task_id, false).await
}
