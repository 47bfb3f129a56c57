use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use super::DaysQuery;
use crate::application::commands::mood_commands::{DeleteMoodLogCommand, LogMoodCommand};
use crate::application::commands::CommandHandler;
use crate::application::dtos::{
    LogMoodInput, MessageDto, MoodAnalyticsDto, MoodLogDto, MoodLogsParams, MoodTimelineDto,
    MoodTodayDto, MoodTrendsDto,
};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::{JsonBody, QueryParams};
use crate::presentation::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/log", post(log_mood))
        .route("/logs", get(logs))
        .route("/logs/{date}", delete(delete_log))
        .route("/timeline", get(timeline))
        .route("/analytics", get(analytics))
        .route("/insights", get(analytics))
        .route("/today", get(today))
        .route("/trends", get(trends))
}

async fn log_mood(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<LogMoodInput>,
) -> ApiResult<Json<MoodLogDto>> {
    let log = state
        .command_handlers
        .log_mood
        .handle(LogMoodCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok(Json(log))
}

async fn logs(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(params): QueryParams<MoodLogsParams>,
) -> ApiResult<Json<Vec<MoodLogDto>>> {
    Ok(Json(state.queries.mood.logs(&ctx, params).await?))
}

async fn delete_log(
    State(state): State<SharedState>,
    ctx: UserContext,
    Path(date): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    let message = state
        .command_handlers
        .delete_mood_log
        .handle(DeleteMoodLogCommand { context: ctx, date })
        .await?;
    Ok(Json(message))
}

async fn timeline(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<DaysQuery>,
) -> ApiResult<Json<MoodTimelineDto>> {
    Ok(Json(state.queries.mood.timeline(&ctx, query.days).await?))
}

async fn analytics(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<DaysQuery>,
) -> ApiResult<Json<MoodAnalyticsDto>> {
    Ok(Json(state.queries.mood.analytics(&ctx, query.days).await?))
}

async fn today(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<MoodTodayDto>> {
    Ok(Json(state.queries.mood.today(&ctx).await?))
}

async fn trends(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<DaysQuery>,
) -> ApiResult<Json<MoodTrendsDto>> {
    Ok(Json(state.queries.mood.trends(&ctx, query.days).await?))
}
