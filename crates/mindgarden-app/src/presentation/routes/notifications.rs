use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::commands::notification_commands::{
    SnoozeNotificationCommand, UpdatePreferencesCommand,
};
use crate::application::commands::CommandHandler;
use crate::application::dtos::{
    NotificationPreferencesDto, PendingNotificationsDto, SnoozeInput, SnoozeResultDto,
    SnoozeStatusDto, UpdatePreferencesInput,
};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::{JsonBody, QueryParams};
use crate::presentation::state::SharedState;

#[derive(Debug, Deserialize)]
struct SnoozeQuery {
    notification_id: String,
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/preferences", get(preferences).put(update_preferences))
        .route("/pending", get(pending))
        .route("/snooze", post(snooze))
        .route("/check-snooze", get(check_snooze))
}

async fn preferences(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<NotificationPreferencesDto>> {
    Ok(Json(state.queries.notification.preferences(&ctx).await?))
}

async fn update_preferences(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<UpdatePreferencesInput>,
) -> ApiResult<Json<NotificationPreferencesDto>> {
    let prefs = state
        .command_handlers
        .update_preferences
        .handle(UpdatePreferencesCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok(Json(prefs))
}

async fn pending(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<PendingNotificationsDto>> {
    Ok(Json(state.queries.notification.pending(&ctx).await?))
}

async fn snooze(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<SnoozeInput>,
) -> ApiResult<Json<SnoozeResultDto>> {
    let result = state
        .command_handlers
        .snooze_notification
        .handle(SnoozeNotificationCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok(Json(result))
}

async fn check_snooze(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<SnoozeQuery>,
) -> ApiResult<Json<SnoozeStatusDto>> {
    Ok(Json(
        state
            .queries
            .notification
            .check_snooze(&ctx, &query.notification_id)
            .await?,
    ))
}
