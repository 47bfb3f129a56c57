use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{middleware, Router};
use log::warn;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::context::USER_ID_HEADER;
use super::error::hide_internal_errors;
use super::state::SharedState;
use mindgarden_infrastructure::config::AppConfig;

mod analytics;
mod habits;
mod health;
mod mood;
mod notifications;
mod tasks;
mod users;

/// `?days=` on report routes.
#[derive(Debug, Default, Deserialize)]
pub struct DaysQuery {
    pub days: Option<u32>,
}

/// Full application router with tracing, timeout and CORS layers.
pub fn build_router(state: SharedState, config: &AppConfig) -> Router {
    let api = Router::new()
        .nest("/users", users::routes())
        .nest("/habits", habits::routes())
        .nest("/tasks", tasks::routes())
        .nest("/mood", mood::routes())
        .nest("/analytics", analytics::routes())
        .nest("/notifications", notifications::routes());

    let mut router = Router::new()
        .merge(health::routes())
        .nest("/api", api)
        .layer(middleware::map_response_with_state(
            state.clone(),
            hide_internal_errors,
        ))
        .layer(TimeoutLayer::new(config.timeouts.http_request))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.frontend_url) {
        router = router.layer(cors);
    }

    router.with_state(state)
}

fn cors_layer(frontend_url: &str) -> Option<CorsLayer> {
    let origin = match HeaderValue::from_str(frontend_url) {
        Ok(origin) => origin,
        Err(e) => {
            warn!("[http] invalid frontend_url={:?} ({}), CORS disabled", frontend_url, e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)])
            .max_age(Duration::from_secs(60 * 60)),
    )
}
