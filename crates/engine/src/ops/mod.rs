//! Engine operations, grouped by concern.
//!
//! Every operation takes the store through `self` (explicit dependency
//! injection, no ambient connection) and runs its writes inside one database
//! transaction: committed on success, rolled back on any error path.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{EngineError, Partner, PartnerRoster, ResultEngine};

mod bank;
mod catalog;
mod closes;
mod expenses;
mod reports;
mod sales;

pub use catalog::{LowStockAlert, NewInventoryItem, NewPayrollPayment};
pub use closes::{ClosingBalance, ExpenseLineInput, NewShiftClose, ShiftCloseDetail, TipLineInput};
pub use expenses::NewExpense;
pub use reports::{ChannelTotal, DailyTotal, DashboardSummary, DistributionSummary};
pub use sales::{SalesFilter, SalesImport};

/// Run a block inside a DB transaction, committing on success. Errors leave
/// the transaction uncommitted, which rolls it back on drop.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    partners: PartnerRoster,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn partners(&self) -> &PartnerRoster {
        &self.partners
    }
}

/// `[start, end)` bounds of a calendar month.
pub(crate) fn month_bounds(month: i32, year: i32) -> ResultEngine<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidInput(format!(
            "month out of range: {month}"
        )));
    }
    let month = month as u32;
    let start = NaiveDate::from_ymd_opt(year, month, 1);
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(EngineError::InvalidInput(format!(
            "invalid period {month}/{year}"
        ))),
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    partners: Option<Vec<Partner>>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the default partner roster.
    pub fn partners(mut self, partners: Vec<Partner>) -> EngineBuilder {
        self.partners = Some(partners);
        self
    }

    /// Construct `Engine`, validating the partner roster.
    pub fn build(self) -> ResultEngine<Engine> {
        let partners = match self.partners {
            Some(partners) => PartnerRoster::new(partners)?,
            None => PartnerRoster::default(),
        };
        Ok(Engine {
            database: self.database,
            partners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_december_rollover() {
        let (start, end) = month_bounds(12, 2025).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_reject_out_of_range() {
        assert!(month_bounds(0, 2026).is_err());
        assert!(month_bounds(13, 2026).is_err());
    }
}
