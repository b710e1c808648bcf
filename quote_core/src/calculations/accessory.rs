//! # Accessory Cost
//!
//! ```text
//! Cost = quantity × unit_price
//! ```
//!
//! The quantity is in the accessory's own billing unit (pieces, meters, ...).
//! An unknown or missing accessory prices at zero.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::accessory::{calculate_accessory, AccessoryUsage};
//! use quote_core::catalog::{AccessorySpec, Catalog, SpecId};
//!
//! let catalog = Catalog::builder()
//!     .accessory(AccessorySpec::new(SpecId(20), "Bolt M4", 2_000.0))
//!     .build();
//!
//! let line = calculate_accessory(&AccessoryUsage::new(Some(SpecId(20)), 5.0), &catalog);
//! assert_eq!(line.cost, 10_000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::UNKNOWN_NAME;
use crate::catalog::{optional_id, Catalog, SpecId, UnitType};
use crate::numeric::{lenient_f64, non_negative};

/// One accessory row on a quote draft.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessoryUsage {
    #[serde(default, with = "optional_id")]
    pub accessory_id: Option<SpecId>,

    /// Amount in the accessory's billing unit
    #[serde(default, with = "lenient_f64")]
    pub quantity: f64,
}

impl AccessoryUsage {
    pub fn new(accessory_id: Option<SpecId>, quantity: f64) -> Self {
        AccessoryUsage { accessory_id, quantity }
    }
}

/// Priced accessory line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryCost {
    pub accessory_id: Option<SpecId>,

    /// Accessory name, or "Unknown" when it did not resolve
    pub name: String,

    pub resolved: bool,

    pub unit_type: Option<UnitType>,

    pub unit_price: f64,

    pub quantity: f64,

    pub cost: f64,
}

/// Price one accessory row. A cost that overflows prices at zero.
pub fn calculate_accessory(usage: &AccessoryUsage, catalog: &Catalog) -> AccessoryCost {
    let spec = usage.accessory_id.and_then(|id| catalog.accessory(id));
    let quantity = non_negative(usage.quantity);
    let unit_price = spec.map(|s| non_negative(s.unit_price)).unwrap_or(0.0);

    AccessoryCost {
        accessory_id: usage.accessory_id,
        name: spec.map(|s| s.name.clone()).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        resolved: spec.is_some(),
        unit_type: spec.map(|s| s.unit_type),
        unit_price,
        quantity,
        cost: non_negative(quantity * unit_price),
    }
}
