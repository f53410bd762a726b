//! Closed enumerations shared across the ledgers.
//!
//! Every enum is stored as its SCREAMING_SNAKE_CASE token in the database
//! and on the wire; `as_str`/`TryFrom<&str>` are the only conversions.

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Expense category used by both expense ledgers and the monthly P&L.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    StaffMeals,
    Tips,
    Supplies,
    Services,
    Maintenance,
    Cleaning,
    Payroll,
    Taxes,
    Rent,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StaffMeals => "STAFF_MEALS",
            Self::Tips => "TIPS",
            Self::Supplies => "SUPPLIES",
            Self::Services => "SERVICES",
            Self::Maintenance => "MAINTENANCE",
            Self::Cleaning => "CLEANING",
            Self::Payroll => "PAYROLL",
            Self::Taxes => "TAXES",
            Self::Rent => "RENT",
            Self::Other => "OTHER",
        }
    }
}

impl TryFrom<&str> for ExpenseCategory {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "STAFF_MEALS" => Ok(Self::StaffMeals),
            "TIPS" => Ok(Self::Tips),
            "SUPPLIES" => Ok(Self::Supplies),
            "SERVICES" => Ok(Self::Services),
            "MAINTENANCE" => Ok(Self::Maintenance),
            "CLEANING" => Ok(Self::Cleaning),
            "PAYROLL" => Ok(Self::Payroll),
            "TAXES" => Ok(Self::Taxes),
            "RENT" => Ok(Self::Rent),
            "OTHER" => Ok(Self::Other),
            other => Err(EngineError::InvalidInput(format!(
                "invalid expense category: {other}"
            ))),
        }
    }
}

/// Ledger class code carried over from the paper register sheets. There is
/// only one class in use today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseClass {
    #[default]
    Nmp,
}

impl ExpenseClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nmp => "NMP",
        }
    }
}

impl TryFrom<&str> for ExpenseClass {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "NMP" => Ok(Self::Nmp),
            other => Err(EngineError::InvalidInput(format!(
                "invalid expense class: {other}"
            ))),
        }
    }
}

/// Kind of supporting document attached to a register expense line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiptKind {
    Voucher,
    System,
    Invoice,
    Ticket,
    NoReceipt,
}

impl ReceiptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voucher => "VOUCHER",
            Self::System => "SYSTEM",
            Self::Invoice => "INVOICE",
            Self::Ticket => "TICKET",
            Self::NoReceipt => "NO_RECEIPT",
        }
    }
}

impl TryFrom<&str> for ReceiptKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "VOUCHER" => Ok(Self::Voucher),
            "SYSTEM" => Ok(Self::System),
            "INVOICE" => Ok(Self::Invoice),
            "TICKET" => Ok(Self::Ticket),
            "NO_RECEIPT" => Ok(Self::NoReceipt),
            other => Err(EngineError::InvalidInput(format!(
                "invalid receipt kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Transfer => "TRANSFER",
        }
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CASH" => Ok(Self::Cash),
            "TRANSFER" => Ok(Self::Transfer),
            other => Err(EngineError::InvalidInput(format!(
                "invalid payment method: {other}"
            ))),
        }
    }
}

/// Card terminal a tip was collected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminalOrigin {
    Parrot,
    Clip,
    Getnet,
}

impl TerminalOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parrot => "PARROT",
            Self::Clip => "CLIP",
            Self::Getnet => "GETNET",
        }
    }
}

impl TryFrom<&str> for TerminalOrigin {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PARROT" => Ok(Self::Parrot),
            "CLIP" => Ok(Self::Clip),
            "GETNET" => Ok(Self::Getnet),
            other => Err(EngineError::InvalidInput(format!(
                "invalid terminal origin: {other}"
            ))),
        }
    }
}

/// Outcome of reconciling a shift close against physically counted cash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReconciliationStatus {
    Balanced,
    Surplus,
    Shortage,
}

impl ReconciliationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::Surplus => "SURPLUS",
            Self::Shortage => "SHORTAGE",
        }
    }
}

impl TryFrom<&str> for ReconciliationStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "BALANCED" => Ok(Self::Balanced),
            "SURPLUS" => Ok(Self::Surplus),
            "SHORTAGE" => Ok(Self::Shortage),
            other => Err(EngineError::InvalidInput(format!(
                "invalid reconciliation status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
        }
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            other => Err(EngineError::InvalidInput(format!(
                "invalid payment status: {other}"
            ))),
        }
    }
}

/// Direction of a bank-statement movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    Charge,
    Credit,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charge => "CHARGE",
            Self::Credit => "CREDIT",
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CHARGE" => Ok(Self::Charge),
            "CREDIT" => Ok(Self::Credit),
            other => Err(EngineError::InvalidInput(format!(
                "invalid movement kind: {other}"
            ))),
        }
    }
}
