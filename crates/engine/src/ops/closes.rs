//! Shift close operations: creation, reconciliation, lookups.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde::Serialize;

use crate::{
    EngineError, ResultEngine,
    categories::{ExpenseCategory, ExpenseClass, ReceiptKind, TerminalOrigin},
    expense_lines,
    shift_closes::{self, expected_closing, reconcile},
    tip_lines,
};

use super::{Engine, month_bounds, with_tx};

#[derive(Clone, Debug)]
pub struct ExpenseLineInput {
    pub vendor: String,
    pub class: ExpenseClass,
    pub category: ExpenseCategory,
    pub receipt: ReceiptKind,
    pub description: String,
    pub amount: f64,
}

#[derive(Clone, Debug)]
pub struct TipLineInput {
    pub terminal: TerminalOrigin,
    pub amount: f64,
}

#[derive(Clone, Debug)]
pub struct NewShiftClose {
    pub date: NaiveDate,
    pub manager: String,
    pub prepared_by: String,
    pub opening_balance: f64,
    pub cash_sales: f64,
    pub expenses: Vec<ExpenseLineInput>,
    pub tips: Vec<TipLineInput>,
    pub counted_cash: Option<f64>,
    pub notes: Option<String>,
}

/// A close together with its owned lines.
#[derive(Clone, Debug, Serialize)]
pub struct ShiftCloseDetail {
    #[serde(flatten)]
    pub close: shift_closes::Model,
    pub expenses: Vec<expense_lines::Model>,
    pub tips: Vec<tip_lines::Model>,
}

/// Cash carried out of the most recent close: the counted amount when a
/// count was taken, the expected closing otherwise.
#[derive(Clone, Debug, Serialize)]
pub struct ClosingBalance {
    pub balance: f64,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl Engine {
    /// Creates the close for a date, computing expected closing and, when a
    /// cash count is provided, the reconciliation verdict. The close and its
    /// lines are written atomically.
    pub async fn create_shift_close(&self, new: NewShiftClose) -> ResultEngine<ShiftCloseDetail> {
        if new.expenses.iter().any(|line| line.amount <= 0.0) {
            return Err(EngineError::InvalidInput(
                "expense line amounts must be positive".to_string(),
            ));
        }
        if new.tips.iter().any(|tip| tip.amount < 0.0) {
            return Err(EngineError::InvalidInput(
                "tip amounts must not be negative".to_string(),
            ));
        }

        let line_total: f64 = new.expenses.iter().map(|line| line.amount).sum();
        let tip_total: f64 = new.tips.iter().map(|tip| tip.amount).sum();
        let total_expenses = line_total + tip_total;
        let expected = expected_closing(new.opening_balance, new.cash_sales, total_expenses);
        let (variance, status) = reconcile(expected, new.counted_cash);

        with_tx!(self, |db_tx| {
            let existing = shift_closes::Entity::find()
                .filter(shift_closes::Column::Date.eq(new.date))
                .one(&db_tx)
                .await?;
            if existing.is_some() {
                return Err(EngineError::ExistingKey(format!(
                    "shift close for {}",
                    new.date
                )));
            }

            let close = shift_closes::ActiveModel {
                date: ActiveValue::Set(new.date),
                manager: ActiveValue::Set(new.manager),
                prepared_by: ActiveValue::Set(new.prepared_by),
                opening_balance: ActiveValue::Set(new.opening_balance),
                cash_sales: ActiveValue::Set(new.cash_sales),
                total_expenses: ActiveValue::Set(total_expenses),
                expected_closing: ActiveValue::Set(expected),
                counted_cash: ActiveValue::Set(new.counted_cash),
                variance: ActiveValue::Set(variance),
                status: ActiveValue::Set(status.map(|s| s.as_str().to_string())),
                notes: ActiveValue::Set(new.notes),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(&db_tx)
            .await?;

            let mut lines = Vec::with_capacity(new.expenses.len());
            for line in new.expenses {
                let model = expense_lines::ActiveModel {
                    close_id: ActiveValue::Set(close.id),
                    vendor: ActiveValue::Set(line.vendor),
                    class: ActiveValue::Set(line.class.as_str().to_string()),
                    category: ActiveValue::Set(line.category.as_str().to_string()),
                    receipt: ActiveValue::Set(line.receipt.as_str().to_string()),
                    description: ActiveValue::Set(line.description),
                    amount: ActiveValue::Set(line.amount),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(&db_tx)
                .await?;
                lines.push(model);
            }

            let mut tips = Vec::with_capacity(new.tips.len());
            for tip in new.tips {
                let model = tip_lines::ActiveModel {
                    close_id: ActiveValue::Set(close.id),
                    terminal: ActiveValue::Set(tip.terminal.as_str().to_string()),
                    amount: ActiveValue::Set(tip.amount),
                    ..Default::default()
                }
                .insert(&db_tx)
                .await?;
                tips.push(model);
            }

            Ok(ShiftCloseDetail {
                close,
                expenses: lines,
                tips,
            })
        })
    }

    /// Records the physically counted cash for an existing close and derives
    /// variance and status together from it.
    pub async fn record_cash_count(
        &self,
        date: NaiveDate,
        counted: f64,
    ) -> ResultEngine<ShiftCloseDetail> {
        with_tx!(self, |db_tx| {
            let close = shift_closes::Entity::find()
                .filter(shift_closes::Column::Date.eq(date))
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("shift close for {date}")))?;

            let (variance, status) = reconcile(close.expected_closing, Some(counted));
            let mut active = close.into_active_model();
            active.counted_cash = ActiveValue::Set(Some(counted));
            active.variance = ActiveValue::Set(variance);
            active.status = ActiveValue::Set(status.map(|s| s.as_str().to_string()));
            let close = active.update(&db_tx).await?;

            let expenses = close
                .find_related(expense_lines::Entity)
                .all(&db_tx)
                .await?;
            let tips = close.find_related(tip_lines::Entity).all(&db_tx).await?;
            Ok(ShiftCloseDetail {
                close,
                expenses,
                tips,
            })
        })
    }

    pub async fn shift_close(&self, date: NaiveDate) -> ResultEngine<ShiftCloseDetail> {
        let close = shift_closes::Entity::find()
            .filter(shift_closes::Column::Date.eq(date))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("shift close for {date}")))?;
        let expenses = close
            .find_related(expense_lines::Entity)
            .all(&self.database)
            .await?;
        let tips = close
            .find_related(tip_lines::Entity)
            .all(&self.database)
            .await?;
        Ok(ShiftCloseDetail {
            close,
            expenses,
            tips,
        })
    }

    /// Lists closes, most recent first. Month and year only filter when both
    /// are given.
    pub async fn list_shift_closes(
        &self,
        month: Option<i32>,
        year: Option<i32>,
        limit: u64,
    ) -> ResultEngine<Vec<shift_closes::Model>> {
        let mut query = shift_closes::Entity::find();
        if let (Some(month), Some(year)) = (month, year) {
            let (start, end) = month_bounds(month, year)?;
            query = query
                .filter(shift_closes::Column::Date.gte(start))
                .filter(shift_closes::Column::Date.lt(end));
        }
        let rows = query
            .order_by_desc(shift_closes::Column::Date)
            .limit(limit)
            .all(&self.database)
            .await?;
        Ok(rows)
    }

    /// Balance carried out of the most recent close; zero when no close has
    /// ever been recorded.
    pub async fn last_closing_balance(&self) -> ResultEngine<ClosingBalance> {
        let last = shift_closes::Entity::find()
            .order_by_desc(shift_closes::Column::Date)
            .one(&self.database)
            .await?;
        Ok(match last {
            Some(close) => ClosingBalance {
                balance: close.counted_cash.unwrap_or(close.expected_closing),
                date: Some(close.date),
                status: close.status,
            },
            None => ClosingBalance {
                balance: 0.0,
                date: None,
                status: None,
            },
        })
    }
}
