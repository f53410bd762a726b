//! Receipt scanning seam.
//!
//! The scanner is an external capability: given image bytes it returns a
//! best-effort structured guess, or fails. Any field may be missing when the
//! receipt is illegible. Failures are recoverable; the expense is simply
//! captured by hand.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, categories::ExpenseCategory};

/// Best-effort structured read of a receipt photo.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReceiptGuess {
    pub date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub total: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub confidence: f64,
}

pub type ScanFuture<'a> = Pin<Box<dyn Future<Output = Result<ReceiptGuess, EngineError>> + Send + 'a>>;

/// An opaque OCR capability for receipt photos.
///
/// Implementations live outside the engine (the app crate wires an HTTP
/// client); the engine only defines the seam so handlers can depend on it.
pub trait ReceiptScanner: Send + Sync {
    fn extract<'a>(&'a self, image: &'a [u8], mime_type: &'a str) -> ScanFuture<'a>;
}
