//! Reporting API endpoints: P&L, distribution, dashboard, sales breakdowns.

use api_types::reports::PeriodQuery;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::{ChannelTotal, DailyTotal, DashboardSummary, DistributionSummary, monthly_pl};

use crate::{ServerError, server::ServerState};

pub async fn pl(
    State(state): State<ServerState>,
    Path((month, year)): Path<(i32, i32)>,
) -> Result<Json<monthly_pl::Model>, ServerError> {
    let statement = state.engine.monthly_pl(month, year).await?;
    Ok(Json(statement))
}

pub async fn distribution(
    State(state): State<ServerState>,
    Path((month, year)): Path<(i32, i32)>,
) -> Result<Json<DistributionSummary>, ServerError> {
    let summary = state.engine.profit_distribution(month, year).await?;
    Ok(Json(summary))
}

pub async fn dashboard(
    State(state): State<ServerState>,
) -> Result<Json<DashboardSummary>, ServerError> {
    let today = chrono::Local::now().date_naive();
    let summary = state.engine.dashboard(today).await?;
    Ok(Json(summary))
}

pub async fn sales_by_channel(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<ChannelTotal>>, ServerError> {
    let totals = state
        .engine
        .sales_by_channel(query.month, query.year)
        .await?;
    Ok(Json(totals))
}

pub async fn daily_sales(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<DailyTotal>>, ServerError> {
    let series = state
        .engine
        .daily_sales_series(query.month, query.year)
        .await?;
    Ok(Json(series))
}
