//! Lamination Specs (square E-I cores)
//!
//! A lamination is priced per kilogram of stacked steel. Each lamination is
//! paired with exactly one E-I core piece (bobbin) priced per unit.

use serde::{Deserialize, Serialize};

use super::SpecId;
use crate::numeric::lenient_f64;

/// Lamination steel used for square (E-I) cores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaminationSpec {
    pub id: SpecId,

    /// Catalog name (e.g., "EI-66")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Steel price per kilogram
    #[serde(default, with = "lenient_f64")]
    pub price_per_kg: f64,

    /// Name of the paired core piece; falls back to the lamination name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_name: Option<String>,

    /// Unit price of the paired core piece
    #[serde(default, with = "lenient_f64")]
    pub core_price: f64,
}

impl LaminationSpec {
    pub fn new(id: SpecId, name: impl Into<String>, price_per_kg: f64) -> Self {
        LaminationSpec {
            id,
            name: name.into(),
            description: None,
            price_per_kg,
            core_name: None,
            core_price: 0.0,
        }
    }

    /// Attach the paired core piece.
    pub fn with_core(mut self, core_name: impl Into<String>, core_price: f64) -> Self {
        self.core_name = Some(core_name.into());
        self.core_price = core_price;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Display name of the paired core piece.
    pub fn core_display_name(&self) -> &str {
        self.core_name.as_deref().unwrap_or(&self.name)
    }
}
