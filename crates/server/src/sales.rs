//! Sales API endpoints

use api_types::sales::SalesQuery;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use engine::{SalesFilter, SalesImport, daily_sales};

use crate::{ServerError, server::ServerState};

/// Imports a point-of-sale export uploaded as the raw request body.
pub async fn import(
    State(state): State<ServerState>,
    body: String,
) -> Result<(StatusCode, Json<SalesImport>), ServerError> {
    let report = state.engine.import_sales_csv(&body).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<Vec<daily_sales::Model>>, ServerError> {
    let rows = state
        .engine
        .list_daily_sales(SalesFilter {
            month_label: query.month,
            from: query.from,
            to: query.to,
        })
        .await?;
    Ok(Json(rows))
}
