//! The module contains the errors the engine can throw.
//!
//! Row-level import problems (short rows, bad dates, placeholder cells) are
//! never errors: importers absorb them into skip counts. Everything here
//! aborts the operation it came from.
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The CSV is structurally unusable (e.g. the daily-detail header row is
    /// missing). The whole import is aborted.
    #[error("malformed csv: {0}")]
    MalformedCsv(String),
    #[error("\"{0}\" not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The receipt scanner could not produce a guess. Recoverable: the
    /// expense can still be captured by hand.
    #[error("recognition failed: {0}")]
    Recognition(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedCsv(a), Self::MalformedCsv(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Recognition(a), Self::Recognition(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
