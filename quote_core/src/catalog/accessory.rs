//! Accessory Specs
//!
//! Priced add-on parts (lead wire, bolts, terminals, insulation) billed per
//! unit of their `unit_type`.

use serde::{Deserialize, Serialize};

use super::SpecId;
use crate::numeric::lenient_f64;

/// Accessory category, used for grouping on the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessoryType {
    ElectricWire,
    Bolt,
    Terminal,
    Insulation,
    #[default]
    Other,
}

/// Billing unit for an accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    #[default]
    PerPiece,
    PerMeter,
    PerKg,
    PerSet,
}

impl UnitType {
    /// Short unit label (e.g., "pc", "m")
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitType::PerPiece => "pc",
            UnitType::PerMeter => "m",
            UnitType::PerKg => "kg",
            UnitType::PerSet => "set",
        }
    }
}

/// Accessory catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorySpec {
    pub id: SpecId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub accessory_type: AccessoryType,

    #[serde(default)]
    pub unit_type: UnitType,

    /// Price per unit
    #[serde(default, with = "lenient_f64")]
    pub unit_price: f64,
}

impl AccessorySpec {
    pub fn new(id: SpecId, name: impl Into<String>, unit_price: f64) -> Self {
        AccessorySpec {
            id,
            name: name.into(),
            description: None,
            accessory_type: AccessoryType::Other,
            unit_type: UnitType::PerPiece,
            unit_price,
        }
    }

    pub fn with_unit(mut self, unit_type: UnitType) -> Self {
        self.unit_type = unit_type;
        self
    }

    pub fn with_type(mut self, accessory_type: AccessoryType) -> Self {
        self.accessory_type = accessory_type;
        self
    }
}
