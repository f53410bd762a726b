//! Standalone expense API endpoints, including receipt scanning.

use api_types::expenses::{ExpenseNew, ExpensesQuery};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
};
use engine::{ExpenseCategory, NewExpense, PaymentMethod, ReceiptGuess, expenses};

use crate::{ServerError, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<expenses::Model>), ServerError> {
    let new = NewExpense {
        date: payload.date,
        vendor: payload.vendor,
        category: ExpenseCategory::try_from(payload.category.as_str())?,
        amount: payload.amount,
        payment_method: PaymentMethod::try_from(payload.payment_method.as_str())?,
        description: payload.description,
    };
    let model = state.engine.create_expense(new).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Json<Vec<expenses::Model>>, ServerError> {
    let category = query
        .category
        .as_deref()
        .map(ExpenseCategory::try_from)
        .transpose()?;
    let rows = state
        .engine
        .list_expenses(query.from, query.to, category)
        .await?;
    Ok(Json(rows))
}

/// Runs the configured receipt scanner over an uploaded image. The image
/// travels as the raw request body; its media type as the Content-Type
/// header.
pub async fn scan(
    State(state): State<ServerState>,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Result<Json<ReceiptGuess>, ServerError> {
    let Some(scanner) = state.scanner.as_ref() else {
        return Err(ServerError::Unavailable(
            "receipt scanning is not configured".to_string(),
        ));
    };
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("image/jpeg");
    let guess = scanner.extract(&body, mime_type).await?;
    Ok(Json(guess))
}
