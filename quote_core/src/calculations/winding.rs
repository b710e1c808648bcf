//! # Winding Cost
//!
//! Prices one winding (primary or secondary coil). Wire weight is either
//! derived from the turn count or typed in directly:
//!
//! ```text
//! By turn count:  L = N × (L_t / 100)            [m]
//!                 A = π × (d / 2)²               [mm²]
//!                 W = A × L × 0.00896            [kg]
//! By weight:      W = weight_kg                  [kg]
//!
//! Cost = W × price_per_kg
//! ```
//!
//! ## JSON Shape
//!
//! A usage fills in either `turn_count` or `weight_kg`. If both are filled
//! the turn count is used; if neither is, the winding weighs nothing.
//!
//! ```json
//! { "spec_id": 10, "winding_type": "PRIMARY", "turn_count": 500 }
//! { "spec_id": 11, "winding_type": "SECONDARY", "weight_kg": 0.5 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::winding::{calculate_winding, WindingUsage};
//! use quote_core::catalog::{Catalog, SpecId, WindingSpec};
//!
//! let catalog = Catalog::builder()
//!     .winding_spec(WindingSpec::new(SpecId(10), "Cu 0.35", 0.35, 280_000.0))
//!     .build();
//!
//! let line = calculate_winding(&WindingUsage::by_turn_count(Some(SpecId(10)), 500.0), &catalog, 15.0);
//! assert!((line.length_m.unwrap() - 75.0).abs() < 1e-9);
//! assert!((line.cost - 18_103.11).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use super::UNKNOWN_NAME;
use crate::catalog::{optional_id, Catalog, SpecId, WindingMaterial, WindingType};
use crate::formulas::{wire_area_mm2, wire_length_m, wire_weight_kg};
use crate::numeric::{lenient_opt_f64, non_negative};

/// How the weight of a winding is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WindingQuantity {
    /// Weight derived from turns, turn length and wire diameter
    ByTurnCount(f64),
    /// Weight typed in by the user
    ByWeight(f64),
    /// Nothing filled in yet
    #[default]
    Unspecified,
}

/// One winding on a quote draft.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawWindingUsage", into = "RawWindingUsage")]
pub struct WindingUsage {
    pub spec_id: Option<SpecId>,
    pub winding_type: WindingType,
    pub quantity: WindingQuantity,
}

impl WindingUsage {
    pub fn by_turn_count(spec_id: Option<SpecId>, turn_count: f64) -> Self {
        WindingUsage {
            spec_id,
            winding_type: WindingType::Primary,
            quantity: WindingQuantity::ByTurnCount(turn_count),
        }
    }

    pub fn by_weight(spec_id: Option<SpecId>, weight_kg: f64) -> Self {
        WindingUsage {
            spec_id,
            winding_type: WindingType::Primary,
            quantity: WindingQuantity::ByWeight(weight_kg),
        }
    }

    pub fn with_type(mut self, winding_type: WindingType) -> Self {
        self.winding_type = winding_type;
        self
    }
}

/// Form-shaped winding row: whichever of the two amount fields is filled
/// in picks the mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawWindingUsage {
    #[serde(default, with = "optional_id")]
    spec_id: Option<SpecId>,
    #[serde(default)]
    winding_type: WindingType,
    #[serde(default, with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    turn_count: Option<f64>,
    #[serde(default, with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    weight_kg: Option<f64>,
}

impl From<RawWindingUsage> for WindingUsage {
    fn from(raw: RawWindingUsage) -> Self {
        let quantity = match (raw.turn_count, raw.weight_kg) {
            (Some(turns), _) => WindingQuantity::ByTurnCount(turns),
            (None, Some(weight)) => WindingQuantity::ByWeight(weight),
            (None, None) => WindingQuantity::Unspecified,
        };
        WindingUsage {
            spec_id: raw.spec_id,
            winding_type: raw.winding_type,
            quantity,
        }
    }
}

impl From<WindingUsage> for RawWindingUsage {
    fn from(usage: WindingUsage) -> Self {
        let (turn_count, weight_kg) = match usage.quantity {
            WindingQuantity::ByTurnCount(turns) => (Some(turns), None),
            WindingQuantity::ByWeight(weight) => (None, Some(weight)),
            WindingQuantity::Unspecified => (None, None),
        };
        RawWindingUsage {
            spec_id: usage.spec_id,
            winding_type: usage.winding_type,
            turn_count,
            weight_kg,
        }
    }
}

/// Priced winding line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingCost {
    pub spec_id: Option<SpecId>,

    /// Spec name, or "Unknown" when the spec did not resolve
    pub name: String,

    pub winding_type: WindingType,

    pub resolved: bool,

    pub material: Option<WindingMaterial>,

    pub diameter_mm: f64,

    pub price_per_kg: f64,

    /// Turns (turn-count mode only)
    pub turn_count: Option<f64>,

    /// Total wire length in meters (turn-count mode only)
    pub length_m: Option<f64>,

    /// Wire weight the cost was computed from
    pub calculated_weight_kg: f64,

    pub cost: f64,
}

/// Price one winding.
///
/// `turn_length_cm` is the average length of one turn and only matters in
/// turn-count mode. An unknown or missing spec prices at zero; in weight
/// mode the typed-in weight is still reported. Length, weight and cost are
/// always finite: a product that overflows prices at zero.
pub fn calculate_winding(usage: &WindingUsage, catalog: &Catalog, turn_length_cm: f64) -> WindingCost {
    let spec = usage.spec_id.and_then(|id| catalog.winding_spec(id));

    let diameter_mm = spec.map(|s| non_negative(s.diameter_mm)).unwrap_or(0.0);
    let price_per_kg = spec.map(|s| non_negative(s.price_per_kg)).unwrap_or(0.0);

    let (turn_count, length_m, calculated_weight_kg) = match usage.quantity {
        WindingQuantity::ByTurnCount(turns) => {
            let turns = non_negative(turns);
            let length = non_negative(wire_length_m(turns, non_negative(turn_length_cm)));
            let weight = match spec {
                Some(_) => non_negative(wire_weight_kg(wire_area_mm2(diameter_mm), length)),
                None => 0.0,
            };
            (Some(turns), Some(length), weight)
        }
        WindingQuantity::ByWeight(weight) => (None, None, non_negative(weight)),
        WindingQuantity::Unspecified => (None, None, 0.0),
    };

    let cost = match spec {
        Some(_) => non_negative(calculated_weight_kg * price_per_kg),
        None => 0.0,
    };

    WindingCost {
        spec_id: usage.spec_id,
        name: spec.map(|s| s.name.clone()).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        winding_type: usage.winding_type,
        resolved: spec.is_some(),
        material: spec.map(|s| s.material),
        diameter_mm,
        price_per_kg,
        turn_count,
        length_m,
        calculated_weight_kg,
        cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WindingSpec;
    use crate::formulas::COPPER_WEIGHT_FACTOR;
    use std::f64::consts::PI;

    fn test_catalog() -> Catalog {
        Catalog::builder()
            .winding_spec(WindingSpec::new(SpecId(10), "Cu 0.35", 0.35, 280_000.0))
            .winding_spec(
                WindingSpec::new(SpecId(11), "Cu 1.2", 1.2, 200_000.0).with_type(WindingType::Secondary),
            )
            .build()
    }

    #[test]
    fn test_turn_count_mode() {
        let line = calculate_winding(&WindingUsage::by_turn_count(Some(SpecId(10)), 500.0), &test_catalog(), 15.0);

        let expected_weight = 500.0 * 0.15 * PI * 0.175_f64.powi(2) * COPPER_WEIGHT_FACTOR;
        assert!((line.calculated_weight_kg - expected_weight).abs() < 1e-12);
        assert!((line.calculated_weight_kg - 0.0646).abs() < 1e-4);
        assert!((line.cost - expected_weight * 280_000.0).abs() < 1e-6);
        // Within rounding of the shop's hand-worked 18,088
        assert!((line.cost - 18_088.0).abs() / 18_088.0 < 0.002);
        assert_eq!(line.turn_count, Some(500.0));
        assert_eq!(line.name, "Cu 0.35");
        assert_eq!(line.material, Some(WindingMaterial::Copper));
    }

    #[test]
    fn test_weight_mode() {
        let usage = WindingUsage::by_weight(Some(SpecId(11)), 0.5).with_type(WindingType::Secondary);
        let line = calculate_winding(&usage, &test_catalog(), 15.0);
        assert_eq!(line.cost, 100_000.0);
        assert_eq!(line.calculated_weight_kg, 0.5);
        assert_eq!(line.length_m, None);
        assert_eq!(line.winding_type, WindingType::Secondary);
    }

    #[test]
    fn test_turn_length_scales_cost() {
        let usage = WindingUsage::by_turn_count(Some(SpecId(10)), 200.0);
        let short = calculate_winding(&usage, &test_catalog(), 10.0);
        let long = calculate_winding(&usage, &test_catalog(), 20.0);
        assert!((long.cost - 2.0 * short.cost).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_spec_is_zero() {
        let line = calculate_winding(&WindingUsage::by_turn_count(Some(SpecId(99)), 500.0), &test_catalog(), 15.0);
        assert_eq!(line.cost, 0.0);
        assert_eq!(line.calculated_weight_kg, 0.0);
        assert_eq!(line.name, UNKNOWN_NAME);
        assert!(!line.resolved);

        // Weight mode keeps the typed-in weight for display
        let line = calculate_winding(&WindingUsage::by_weight(Some(SpecId(99)), 0.7), &test_catalog(), 15.0);
        assert_eq!(line.cost, 0.0);
        assert_eq!(line.calculated_weight_kg, 0.7);
    }

    #[test]
    fn test_overflow_prices_at_zero() {
        let catalog = Catalog::builder()
            .winding_spec(WindingSpec::new(SpecId(30), "Bare", 0.0, 280_000.0))
            .winding_spec(WindingSpec::new(SpecId(31), "Pricey", 1.0, 1e300))
            .build();

        // Zero diameter times an overflowed length
        let line = calculate_winding(&WindingUsage::by_turn_count(Some(SpecId(30)), 1e305), &catalog, 1e10);
        assert_eq!(line.length_m, Some(0.0));
        assert_eq!(line.calculated_weight_kg, 0.0);
        assert_eq!(line.cost, 0.0);

        let line = calculate_winding(&WindingUsage::by_weight(Some(SpecId(31)), 1e300), &catalog, 15.0);
        assert!(line.calculated_weight_kg.is_finite());
        assert_eq!(line.cost, 0.0);
    }

    #[test]
    fn test_unspecified_quantity() {
        let usage = WindingUsage {
            spec_id: Some(SpecId(10)),
            ..Default::default()
        };
        let line = calculate_winding(&usage, &test_catalog(), 15.0);
        assert_eq!(line.cost, 0.0);
        assert!(line.resolved);
    }

    #[test]
    fn test_mode_selected_by_populated_field() {
        let turns: WindingUsage = serde_json::from_str(r#"{ "spec_id": 10, "turn_count": "500" }"#).unwrap();
        assert_eq!(turns.quantity, WindingQuantity::ByTurnCount(500.0));

        let weight: WindingUsage =
            serde_json::from_str(r#"{ "spec_id": "11", "winding_type": "SECONDARY", "weight_kg": 0.5 }"#).unwrap();
        assert_eq!(weight.quantity, WindingQuantity::ByWeight(0.5));
        assert_eq!(weight.winding_type, WindingType::Secondary);

        let blank_turns: WindingUsage =
            serde_json::from_str(r#"{ "spec_id": 10, "turn_count": "", "weight_kg": 0.25 }"#).unwrap();
        assert_eq!(blank_turns.quantity, WindingQuantity::ByWeight(0.25));

        let both: WindingUsage = serde_json::from_str(r#"{ "spec_id": 10, "turn_count": 100, "weight_kg": 0.25 }"#).unwrap();
        assert_eq!(both.quantity, WindingQuantity::ByTurnCount(100.0));

        let neither: WindingUsage = serde_json::from_str(r#"{ "spec_id": "" }"#).unwrap();
        assert_eq!(neither.quantity, WindingQuantity::Unspecified);
        assert_eq!(neither.spec_id, None);
    }

    #[test]
    fn test_usage_serializes_populated_field_only() {
        let json = serde_json::to_string(&WindingUsage::by_weight(Some(SpecId(11)), 0.5)).unwrap();
        assert!(json.contains("\"weight_kg\":0.5"));
        assert!(!json.contains("turn_count"));
    }
}
