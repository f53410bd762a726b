//! Bookkeeping engine for a single-restaurant back office.
//!
//! The engine ingests point-of-sale and bank-statement CSV exports, records
//! daily register closes with their reconciliation, tracks expenses, payroll
//! and inventory, and rolls everything up into a monthly P&L with partner
//! profit distribution. All persistence goes through the
//! [`sea_orm::DatabaseConnection`] handed to the [`Engine`] at build time.

pub use categories::{
    ExpenseCategory, ExpenseClass, MovementKind, PaymentMethod, PaymentStatus, ReceiptKind,
    ReconciliationStatus, TerminalOrigin,
};
pub use dates::{parse_bank_date, parse_sales_date};
pub use error::EngineError;
pub use money::parse_money;
pub use ops::{
    ChannelTotal, ClosingBalance, DailyTotal, DashboardSummary, DistributionSummary, Engine,
    EngineBuilder, ExpenseLineInput, LowStockAlert, NewExpense, NewInventoryItem,
    NewPayrollPayment, NewShiftClose, SalesFilter, SalesImport, ShiftCloseDetail, TipLineInput,
};
pub use partners::{Partner, PartnerRoster};
pub use recognition::{ReceiptGuess, ReceiptScanner, ScanFuture};
pub use shift_closes::{BALANCE_TOLERANCE, expected_closing, reconcile};

pub mod bank_movements;
mod categories;
pub mod daily_sales;
mod dates;
pub mod distributions;
pub mod employees;
mod error;
pub mod expense_lines;
pub mod expenses;
pub mod inventory_items;
mod money;
pub mod monthly_pl;
mod ops;
mod partners;
pub mod payables;
pub mod payroll_payments;
mod recognition;
pub mod shift_closes;
pub mod tip_lines;
pub mod vendors;

pub type ResultEngine<T> = Result<T, EngineError>;
