//! # Pricing Settings
//!
//! Shop-wide defaults that feed every calculation. Settings are a small JSON
//! document; any field left out takes its default.
//!
//! ```json
//! {
//!   "turn_length_cm": 15.0,
//!   "include_core_piece_price": false,
//!   "report_unresolved": false,
//!   "currency": "VND"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::settings::PricingSettings;
//!
//! let settings: PricingSettings = serde_json::from_str(r#"{ "turn_length_cm": 18 }"#).unwrap();
//! assert_eq!(settings.turn_length_cm, 18.0);
//! assert_eq!(settings.currency, "VND");
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PriceError, PriceResult};

/// Default average length of one turn, in centimeters
pub const DEFAULT_TURN_LENGTH_CM: f64 = 15.0;

/// Default currency code carried on exports
pub const DEFAULT_CURRENCY: &str = "VND";

/// Shop-configurable pricing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// Average turn length used when a draft does not set its own
    pub turn_length_cm: f64,

    /// Add the paired E-I core piece price to square cores
    pub include_core_piece_price: bool,

    /// Attach diagnostics for unresolved catalog references to results
    pub report_unresolved: bool,

    /// ISO currency code for presentation; prices are plain numbers
    pub currency: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            turn_length_cm: DEFAULT_TURN_LENGTH_CM,
            include_core_piece_price: false,
            report_unresolved: false,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingSettings {
    /// Validate settings loaded from a file.
    pub fn validate(&self) -> PriceResult<()> {
        if !self.turn_length_cm.is_finite() || self.turn_length_cm <= 0.0 {
            return Err(PriceError::invalid_input(
                "turn_length_cm",
                self.turn_length_cm.to_string(),
                "Turn length must be a positive number",
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(PriceError::missing_field("currency"));
        }
        Ok(())
    }

    /// Turn length for one quote: the draft's own value when it is usable,
    /// otherwise the shop default.
    pub fn effective_turn_length_cm(&self, draft_override: Option<f64>) -> f64 {
        match draft_override {
            Some(cm) if cm.is_finite() && cm > 0.0 => cm,
            _ => self.turn_length_cm,
        }
    }

    pub fn with_core_piece_price(mut self, include: bool) -> Self {
        self.include_core_piece_price = include;
        self
    }

    pub fn with_diagnostics(mut self, report: bool) -> Self {
        self.report_unresolved = report;
        self
    }
}
