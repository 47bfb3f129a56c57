use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::application::utils::format_timestamp;
use crate::presentation::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "MindGarden API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "environment": state.environment.to_string(),
        "timestamp": format_timestamp(state.clock.now()),
    }))
}
