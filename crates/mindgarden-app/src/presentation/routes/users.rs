use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::commands::user_commands::{RegisterUserCommand, UpdateProfileCommand};
use crate::application::commands::CommandHandler;
use crate::application::dtos::{RegisterUserInput, UpdateProfileInput, UserDto};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::JsonBody;
use crate::presentation::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(register))
        .route("/me", get(me).put(update_me))
}

async fn register(
    State(state): State<SharedState>,
    JsonBody(input): JsonBody<RegisterUserInput>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .command_handlers
        .register_user
        .handle(RegisterUserCommand { input })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn me(State(state): State<SharedState>, ctx: UserContext) -> ApiResult<Json<UserDto>> {
    Ok(Json(state.queries.user.profile(&ctx).await?))
}

async fn update_me(
    State(state): State<SharedState>,
    ctx: UserContext,
    JsonBody(input): JsonBody<UpdateProfileInput>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .command_handlers
        .update_profile
        .handle(UpdateProfileCommand {
            context: ctx,
            input,
        })
        .await?;
    Ok(Json(user))
}
