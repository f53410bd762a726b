//! Request and query types of the HTTP API.
//!
//! Enumerated fields travel as their SCREAMING_SNAKE_CASE tokens; the server
//! validates them against the engine's closed sets and answers 422 for
//! unknown tokens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod sales {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SalesQuery {
        /// Lowercased three-letter month label, e.g. `feb`.
        pub month: Option<String>,
        pub from: Option<NaiveDate>,
        pub to: Option<NaiveDate>,
    }
}

pub mod closes {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseLineNew {
        pub vendor: String,
        #[serde(default = "default_class")]
        pub class: String,
        pub category: String,
        pub receipt: String,
        pub description: String,
        pub amount: f64,
    }

    fn default_class() -> String {
        "NMP".to_string()
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TipLineNew {
        pub terminal: String,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShiftCloseNew {
        pub date: NaiveDate,
        pub manager: String,
        pub prepared_by: String,
        pub opening_balance: f64,
        #[serde(default)]
        pub cash_sales: f64,
        pub expenses: Vec<ExpenseLineNew>,
        #[serde(default)]
        pub tips: Vec<TipLineNew>,
        pub counted_cash: Option<f64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CashCountUpdate {
        pub counted_cash: f64,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ClosesQuery {
        pub month: Option<i32>,
        pub year: Option<i32>,
        pub limit: Option<u64>,
    }
}

pub mod expenses {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub date: NaiveDate,
        pub vendor: String,
        pub category: String,
        pub amount: f64,
        pub payment_method: String,
        pub description: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpensesQuery {
        pub from: Option<NaiveDate>,
        pub to: Option<NaiveDate>,
        pub category: Option<String>,
    }
}

pub mod bank {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MovementsQuery {
        pub month: Option<i32>,
        pub year: Option<i32>,
        #[serde(default)]
        pub unreconciled_only: bool,
    }
}

pub mod reports {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PeriodQuery {
        pub month: Option<i32>,
        pub year: Option<i32>,
    }
}

pub mod catalog {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VendorNew {
        pub name: String,
        pub default_category: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PayableNew {
        pub vendor_id: i32,
        pub total: f64,
        pub due_date: NaiveDate,
        pub description: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PayablesQuery {
        pub status: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EmployeeNew {
        pub name: String,
        pub role: String,
        pub base_salary: f64,
        pub hired_on: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PayrollPaymentNew {
        pub employee_id: i32,
        pub period_start: NaiveDate,
        pub period_end: NaiveDate,
        pub base_salary: f64,
        #[serde(default)]
        pub overtime: f64,
        #[serde(default)]
        pub deductions: f64,
        pub net_paid: f64,
        pub paid_on: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InventoryItemNew {
        pub name: String,
        pub unit: String,
        #[serde(default)]
        pub stock: f64,
        #[serde(default)]
        pub min_stock: f64,
        #[serde(default)]
        pub unit_price: f64,
        pub vendor: Option<String>,
    }
}
