//! Winding Wire Specs
//!
//! Magnet wire sold by the kilogram. Diameter drives the cross-section used
//! when weight is derived from turn count.

use serde::{Deserialize, Serialize};

use super::SpecId;
use crate::numeric::lenient_f64;

/// Which coil a winding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindingType {
    #[default]
    Primary,
    Secondary,
}

impl WindingType {
    pub fn display_name(&self) -> &'static str {
        match self {
            WindingType::Primary => "Primary",
            WindingType::Secondary => "Secondary",
        }
    }
}

impl std::fmt::Display for WindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Conductor material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindingMaterial {
    #[default]
    Copper,
    Aluminum,
}

impl WindingMaterial {
    pub fn display_name(&self) -> &'static str {
        match self {
            WindingMaterial::Copper => "Copper",
            WindingMaterial::Aluminum => "Aluminum",
        }
    }
}

/// Winding wire catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingSpec {
    pub id: SpecId,

    /// Catalog name (e.g., "Cu 0.35")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Catalog classification; the usage decides the actual coil
    #[serde(default)]
    pub winding_type: WindingType,

    #[serde(default)]
    pub material: WindingMaterial,

    /// Bare wire diameter in millimeters
    #[serde(default, with = "lenient_f64")]
    pub diameter_mm: f64,

    /// Wire price per kilogram
    #[serde(default, with = "lenient_f64")]
    pub price_per_kg: f64,
}

impl WindingSpec {
    pub fn new(id: SpecId, name: impl Into<String>, diameter_mm: f64, price_per_kg: f64) -> Self {
        WindingSpec {
            id,
            name: name.into(),
            description: None,
            winding_type: WindingType::Primary,
            material: WindingMaterial::Copper,
            diameter_mm,
            price_per_kg,
        }
    }

    pub fn with_material(mut self, material: WindingMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_type(mut self, winding_type: WindingType) -> Self {
        self.winding_type = winding_type;
        self
    }
}
