use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::commands::habit_commands::*;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{
    CreateHabitInput, HabitCompletionDto, HabitDto, HabitLogResultDto, HabitStreakDto,
    HabitUncompleteDto, LogHabitInput, MessageDto, UpdateHabitInput, WeeklyStatDto,
};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::{JsonBody, QueryParams};
use crate::presentation::state::SharedState;

#[derive(Debug, Default, Deserialize)]
struct CompleteQuery {
    date: Option<String>,
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_habits).post(create_habit))
        .route("/weekly-stats", get(weekly_stats))
        .route(
            "/{id}",
            get(get_habit).put(update_habit).delete(delete_habit),
        )
        .route("/{id}/streak", get(habit_streak))
        .route("/{id}/log", post(log_habit))
        .route("/{id}/complete", post(complete_habit))
        .route("/{id}/complete/{date}", delete(uncomplete_habit))
}

async fn list_habits(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<Vec<HabitDto>>> {
    Ok(Json(state.queries.habit.list(&ctx).await?))
}

async fn create_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<CreateHabitInput>,
) -> ApiResult<(StatusCode, Json<HabitDto>)> {
    let habit = state
        .command_handlers
        .create_habit
        .handle(CreateHabitCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

async fn weekly_stats(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<Vec<WeeklyStatDto>>> {
    Ok(Json(state.queries.habit.weekly_stats(&ctx).await?))
}

async fn get_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<HabitDto>> {
    Ok(Json(state.queries.habit.get(&ctx, &habit_id).await?))
}

async fn update_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
    JsonBody(input): JsonBody<UpdateHabitInput>,
) -> ApiResult<Json<HabitDto>> {
    let habit = state
        .command_handlers
        .update_habit
        .handle(UpdateHabitCommand {
            context: ctx,
            habit_id,
            input,
        })
        .await?;
    Ok(Json(habit))
}

async fn delete_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    let message = state
        .command_handlers
        .delete_habit
        .handle(DeleteHabitCommand {
            context: ctx,
            habit_id,
        })
        .await?;
    Ok(Json(message))
}

async fn habit_streak(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<HabitStreakDto>> {
    Ok(Json(state.queries.habit.streak(&ctx, &habit_id).await?))
}

async fn log_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
    JsonBody(input): JsonBody<LogHabitInput>,
) -> ApiResult<Json<HabitLogResultDto>> {
    let result = state
        .command_handlers
        .habit_completion
        .handle(LogHabitCommand {
            context: ctx,
            habit_id,
            input,
        })
        .await?;
    Ok(Json(result))
}

async fn complete_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(habit_id): Path<String>,
    QueryParams(query): QueryParams<CompleteQuery>,
) -> ApiResult<Json<HabitCompletionDto>> {
    let result = state
        .command_handlers
        .habit_completion
        .handle(CompleteHabitCommand {
            context: ctx,
            habit_id,
            date: query.date,
        })
        .await?;
    Ok(Json(result))
}

async fn uncomplete_habit(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path((habit_id, date)): Path<(String, String)>,
) -> ApiResult<Json<HabitUncompleteDto>> {
    let result = state
        .command_handlers
        .habit_completion
        .handle(UncompleteHabitCommand {
            context: ctx,
            habit_id,
            date,
        })
        .await?;
    Ok(Json(result))
}
