//! The fixed partner roster used for profit distribution.
//!
//! The roster is configuration, not data: partners and their percentages
//! change by redeploying, never through the API.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub percentage: f64,
}

/// Immutable roster of partners. Percentages must sum to 100; this is
/// checked once when the engine is built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartnerRoster(Vec<Partner>);

impl PartnerRoster {
    pub fn new(partners: Vec<Partner>) -> ResultEngine<Self> {
        let total: f64 = partners.iter().map(|p| p.percentage).sum();
        if (total - 100.0).abs() > 1e-6 {
            return Err(EngineError::InvalidInput(format!(
                "partner percentages must sum to 100, got {total}"
            )));
        }
        Ok(Self(partners))
    }

    pub fn partners(&self) -> &[Partner] {
        &self.0
    }
}

impl Default for PartnerRoster {
    fn default() -> Self {
        let partners = [
            ("Jorge", 25.0),
            ("Male", 25.0),
            ("Sotes", 25.0),
            ("Luis", 12.5),
            ("Nino", 12.5),
        ];
        Self(
            partners
                .into_iter()
                .map(|(name, percentage)| Partner {
                    name: name.to_string(),
                    percentage,
                })
                .collect(),
        )
    }
}
