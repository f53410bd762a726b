//! Bank statement API endpoints

use api_types::bank::MovementsQuery;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use engine::bank_movements;
use serde::Serialize;

use crate::{ServerError, server::ServerState};

#[derive(Serialize)]
pub struct BankImportReport {
    pub imported: u64,
}

/// Imports a bank statement uploaded as the raw request body. Bytes are
/// decoded best-effort, so any encoding the bank exports is accepted.
pub async fn import(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BankImportReport>), ServerError> {
    let imported = state.engine.import_bank_csv(&body).await?;
    Ok((StatusCode::CREATED, Json(BankImportReport { imported })))
}

pub async fn movements(
    State(state): State<ServerState>,
    Query(query): Query<MovementsQuery>,
) -> Result<Json<Vec<bank_movements::Model>>, ServerError> {
    let rows = state
        .engine
        .list_bank_movements(query.month, query.year, query.unreconciled_only)
        .await?;
    Ok(Json(rows))
}
