//! End-of-shift cash register close and its reconciliation arithmetic.
//!
//! A close is unique per calendar date and owns its expense and tip lines.
//! Variance and status are always derived together from the counted cash;
//! they are never written independently.

use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::categories::ReconciliationStatus;

/// Counted-vs-expected differences below this are considered balanced.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Expected cash in the drawer at the end of the shift.
pub fn expected_closing(opening_balance: f64, cash_sales: f64, total_expenses: f64) -> f64 {
    opening_balance + cash_sales - total_expenses
}

/// Reconciles the physically counted cash against the expected closing.
///
/// Returns `(variance, status)`, both `None` when no count was taken.
pub fn reconcile(
    expected: f64,
    counted: Option<f64>,
) -> (Option<f64>, Option<ReconciliationStatus>) {
    let Some(counted) = counted else {
        return (None, None);
    };
    let variance = counted - expected;
    let status = if variance.abs() < BALANCE_TOLERANCE {
        ReconciliationStatus::Balanced
    } else if variance > 0.0 {
        ReconciliationStatus::Surplus
    } else {
        ReconciliationStatus::Shortage
    };
    (Some(variance), Some(status))
}

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "shift_closes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: Date,
    pub manager: String,
    pub prepared_by: String,
    pub opening_balance: f64,
    pub cash_sales: f64,
    pub total_expenses: f64,
    pub expected_closing: f64,
    pub counted_cash: Option<f64>,
    pub variance: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::expense_lines::Entity")]
    ExpenseLines,
    #[sea_orm(has_many = "super::tip_lines::Entity")]
    TipLines,
}

impl Related<super::expense_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseLines.def()
    }
}

impl Related<super::tip_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TipLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_closing_subtracts_expenses() {
        assert_eq!(expected_closing(5000.0, 12500.50, 2050.0), 15450.50);
    }

    #[test]
    fn surplus_when_counted_exceeds_expected() {
        let (variance, status) = reconcile(15450.50, Some(16450.50));
        assert_eq!(variance, Some(1000.0));
        assert_eq!(status, Some(ReconciliationStatus::Surplus));
    }

    #[test]
    fn balanced_within_tolerance() {
        let (variance, status) = reconcile(15450.50, Some(15450.50));
        assert!(variance.unwrap().abs() < BALANCE_TOLERANCE);
        assert_eq!(status, Some(ReconciliationStatus::Balanced));
    }

    #[test]
    fn shortage_when_cash_is_missing() {
        let (variance, status) = reconcile(1000.0, Some(900.0));
        assert_eq!(variance, Some(-100.0));
        assert_eq!(status, Some(ReconciliationStatus::Shortage));
    }

    #[test]
    fn no_count_means_no_verdict() {
        assert_eq!(reconcile(1000.0, None), (None, None));
    }
}
