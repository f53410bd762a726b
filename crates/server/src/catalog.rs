//! Vendor, payable, employee, payroll and inventory API endpoints.

use api_types::catalog::{
    EmployeeNew, InventoryItemNew, PayableNew, PayablesQuery, PayrollPaymentNew, VendorNew,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use engine::{
    ExpenseCategory, LowStockAlert, NewInventoryItem, NewPayrollPayment, PaymentStatus, employees,
    inventory_items, payables, payroll_payments, vendors,
};

use crate::{ServerError, server::ServerState};

pub async fn vendor_create(
    State(state): State<ServerState>,
    Json(payload): Json<VendorNew>,
) -> Result<(StatusCode, Json<vendors::Model>), ServerError> {
    let category = ExpenseCategory::try_from(payload.default_category.as_str())?;
    let model = state.engine.create_vendor(payload.name, category).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn vendor_list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<vendors::Model>>, ServerError> {
    Ok(Json(state.engine.list_vendors().await?))
}

pub async fn payable_create(
    State(state): State<ServerState>,
    Json(payload): Json<PayableNew>,
) -> Result<(StatusCode, Json<payables::Model>), ServerError> {
    let model = state
        .engine
        .create_payable(
            payload.vendor_id,
            payload.total,
            payload.due_date,
            payload.description,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn payable_list(
    State(state): State<ServerState>,
    Query(query): Query<PayablesQuery>,
) -> Result<Json<Vec<payables::Model>>, ServerError> {
    let status = query
        .status
        .as_deref()
        .map(PaymentStatus::try_from)
        .transpose()?;
    Ok(Json(state.engine.list_payables(status).await?))
}

pub async fn employee_create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeNew>,
) -> Result<(StatusCode, Json<employees::Model>), ServerError> {
    let model = state
        .engine
        .create_employee(
            payload.name,
            payload.role,
            payload.base_salary,
            payload.hired_on,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn employee_list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<employees::Model>>, ServerError> {
    Ok(Json(state.engine.list_employees().await?))
}

pub async fn payroll_create(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollPaymentNew>,
) -> Result<(StatusCode, Json<payroll_payments::Model>), ServerError> {
    let model = state
        .engine
        .record_payroll_payment(NewPayrollPayment {
            employee_id: payload.employee_id,
            period_start: payload.period_start,
            period_end: payload.period_end,
            base_salary: payload.base_salary,
            overtime: payload.overtime,
            deductions: payload.deductions,
            net_paid: payload.net_paid,
            paid_on: payload.paid_on,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn inventory_create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemNew>,
) -> Result<(StatusCode, Json<inventory_items::Model>), ServerError> {
    let model = state
        .engine
        .create_inventory_item(NewInventoryItem {
            name: payload.name,
            unit: payload.unit,
            stock: payload.stock,
            min_stock: payload.min_stock,
            unit_price: payload.unit_price,
            vendor: payload.vendor,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

pub async fn inventory_list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<inventory_items::Model>>, ServerError> {
    Ok(Json(state.engine.list_inventory_items().await?))
}

pub async fn inventory_alerts(
    State(state): State<ServerState>,
) -> Result<Json<Vec<LowStockAlert>>, ServerError> {
    Ok(Json(state.engine.low_stock_alerts().await?))
}
