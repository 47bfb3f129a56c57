use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::DaysQuery;
use crate::application::dtos::{DashboardDto, MonthlyTrendsDto, ScoreboardDto, WeeklyReportDto};
use crate::application::UserContext;
use crate::presentation::error::ApiResult;
use crate::presentation::extract::QueryParams;
use crate::presentation::state::SharedState;

#[derive(Debug, Default, Deserialize)]
struct MonthsQuery {
    months: Option<u32>,
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/weekly-report", get(weekly_report))
        .route("/monthly-trends", get(monthly_trends))
        .route("/scoreboard", get(scoreboard))
}

async fn dashboard(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<DaysQuery>,
) -> ApiResult<Json<DashboardDto>> {
    Ok(Json(state.queries.analytics.dashboard(&ctx, query.days).await?))
}

async fn weekly_report(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<WeeklyReportDto>> {
    Ok(Json(state.queries.analytics.weekly_report(&ctx).await?))
}

async fn monthly_trends(
    State(state): State<SharedState>,
    ctx: UserContext,
    QueryParams(query): QueryParams<MonthsQuery>,
) -> ApiResult<Json<MonthlyTrendsDto>> {
    Ok(Json(
        state.queries.analytics.monthly_trends(&ctx, query.months).await?,
    ))
}

async fn scoreboard(
    State(state): State<SharedState>,
    ctx: UserContext,
) -> ApiResult<Json<ScoreboardDto>> {
    Ok(Json(state.queries.analytics.scoreboard(&ctx).await?))
}
