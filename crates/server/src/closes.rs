//! Shift close API endpoints

use api_types::closes::{CashCountUpdate, ClosesQuery, ShiftCloseNew};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use engine::{
    ClosingBalance, ExpenseCategory, ExpenseClass, ExpenseLineInput, NewShiftClose, ReceiptKind,
    ShiftCloseDetail, TerminalOrigin, TipLineInput, shift_closes,
};

use crate::{ServerError, server::ServerState};

fn map_new_close(payload: ShiftCloseNew) -> Result<NewShiftClose, ServerError> {
    let mut expenses = Vec::with_capacity(payload.expenses.len());
    for line in payload.expenses {
        expenses.push(ExpenseLineInput {
            vendor: line.vendor,
            class: ExpenseClass::try_from(line.class.as_str())?,
            category: ExpenseCategory::try_from(line.category.as_str())?,
            receipt: ReceiptKind::try_from(line.receipt.as_str())?,
            description: line.description,
            amount: line.amount,
        });
    }
    let mut tips = Vec::with_capacity(payload.tips.len());
    for tip in payload.tips {
        tips.push(TipLineInput {
            terminal: TerminalOrigin::try_from(tip.terminal.as_str())?,
            amount: tip.amount,
        });
    }
    Ok(NewShiftClose {
        date: payload.date,
        manager: payload.manager,
        prepared_by: payload.prepared_by,
        opening_balance: payload.opening_balance,
        cash_sales: payload.cash_sales,
        expenses,
        tips,
        counted_cash: payload.counted_cash,
        notes: payload.notes,
    })
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShiftCloseNew>,
) -> Result<(StatusCode, Json<ShiftCloseDetail>), ServerError> {
    let new = map_new_close(payload)?;
    let detail = state.engine.create_shift_close(new).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ClosesQuery>,
) -> Result<Json<Vec<shift_closes::Model>>, ServerError> {
    let rows = state
        .engine
        .list_shift_closes(query.month, query.year, query.limit.unwrap_or(30))
        .await?;
    Ok(Json(rows))
}

pub async fn last_balance(
    State(state): State<ServerState>,
) -> Result<Json<ClosingBalance>, ServerError> {
    let balance = state.engine.last_closing_balance().await?;
    Ok(Json(balance))
}

pub async fn by_date(
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ShiftCloseDetail>, ServerError> {
    let detail = state.engine.shift_close(date).await?;
    Ok(Json(detail))
}

pub async fn cash_count(
    State(state): State<ServerState>,
    Path(date): Path<NaiveDate>,
    Json(payload): Json<CashCountUpdate>,
) -> Result<Json<ShiftCloseDetail>, ServerError> {
    let detail = state
        .engine
        .record_cash_count(date, payload.counted_cash)
        .await?;
    Ok(Json(detail))
}
