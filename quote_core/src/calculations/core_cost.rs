//! # Core Cost
//!
//! Prices the transformer core by weight.
//!
//! - **Square (E-I)**: weight × lamination price per kg, looked up in the
//!   catalog. Optionally adds the paired core piece price.
//! - **Round (toroid)**: weight × a per-kg rate typed in on the draft.
//!
//! A square core with no lamination selected, or one whose id is not in the
//! catalog, prices at zero.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::core_cost::{calculate_core, CoreInput};
//! use quote_core::catalog::{Catalog, LaminationSpec, SpecId};
//!
//! let catalog = Catalog::builder()
//!     .lamination(LaminationSpec::new(SpecId(1), "EI-66", 45_000.0))
//!     .build();
//!
//! let line = calculate_core(&CoreInput::square(Some(SpecId(1)), 2.0), &catalog, false);
//! assert_eq!(line.total_cost, 90_000.0);
//! assert_eq!(line.description, "core: EI-66");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{optional_id, Catalog, SpecId};
use crate::numeric::{lenient_f64, non_negative};

/// Description used for every round core line
pub const ROUND_CORE_LABEL: &str = "Round core (toroid)";

/// Description prefix for square core lines
pub const SQUARE_CORE_PREFIX: &str = "core: ";

/// Core shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreType {
    /// Stacked E-I laminations
    #[default]
    Square,
    /// Toroidal ring core
    Round,
}

impl CoreType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CoreType::Square => "Square (E-I)",
            CoreType::Round => "Round (toroid)",
        }
    }
}

/// Core section of a quote draft.
///
/// ## JSON Example
///
/// ```json
/// { "type": "SQUARE", "lamination_id": 1, "weight_kg": 2.0 }
/// { "type": "ROUND", "weight_kg": 3.5, "price_per_kg": 60000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreInput {
    Square {
        #[serde(default, with = "optional_id")]
        lamination_id: Option<SpecId>,
        #[serde(default, with = "lenient_f64")]
        weight_kg: f64,
    },
    Round {
        #[serde(default, with = "lenient_f64")]
        weight_kg: f64,
        #[serde(default, with = "lenient_f64")]
        price_per_kg: f64,
    },
}

impl Default for CoreInput {
    fn default() -> Self {
        CoreInput::Square {
            lamination_id: None,
            weight_kg: 0.0,
        }
    }
}

impl CoreInput {
    pub fn square(lamination_id: Option<SpecId>, weight_kg: f64) -> Self {
        CoreInput::Square { lamination_id, weight_kg }
    }

    pub fn round(weight_kg: f64, price_per_kg: f64) -> Self {
        CoreInput::Round { weight_kg, price_per_kg }
    }

    pub fn core_type(&self) -> CoreType {
        match self {
            CoreInput::Square { .. } => CoreType::Square,
            CoreInput::Round { .. } => CoreType::Round,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            CoreInput::Square { weight_kg, .. } | CoreInput::Round { weight_kg, .. } => non_negative(*weight_kg),
        }
    }

    pub fn lamination_id(&self) -> Option<SpecId> {
        match self {
            CoreInput::Square { lamination_id, .. } => *lamination_id,
            CoreInput::Round { .. } => None,
        }
    }
}

/// Priced core line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreCost {
    pub core_type: CoreType,

    /// Datasheet description ("core: EI-66" or the round core label)
    pub description: String,

    /// Selected lamination (square cores only)
    pub lamination_id: Option<SpecId>,

    /// Whether the core's catalog reference resolved (always true for round)
    pub resolved: bool,

    pub weight_kg: f64,

    /// Rate applied to the weight
    pub price_per_kg: f64,

    /// weight_kg × price_per_kg
    pub material_cost: f64,

    /// Paired E-I core piece, when it was priced in
    pub core_piece_name: Option<String>,

    pub core_piece_price: f64,

    /// material_cost + core_piece_price
    pub total_cost: f64,
}

/// Price the core section of a draft.
///
/// `include_core_piece` adds the lamination's paired core piece price to a
/// resolved square core. A cost that overflows prices at zero.
pub fn calculate_core(input: &CoreInput, catalog: &Catalog, include_core_piece: bool) -> CoreCost {
    let weight_kg = input.weight_kg();

    match input {
        CoreInput::Square { lamination_id, .. } => {
            let lamination = lamination_id.and_then(|id| catalog.lamination(id));

            let price_per_kg = lamination.map(|l| non_negative(l.price_per_kg)).unwrap_or(0.0);
            let description = match lamination {
                Some(l) => format!("{SQUARE_CORE_PREFIX}{}", l.name),
                None => format!("{SQUARE_CORE_PREFIX}-"),
            };
            let (core_piece_name, core_piece_price) = match lamination {
                Some(l) if include_core_piece => {
                    (Some(l.core_display_name().to_string()), non_negative(l.core_price))
                }
                _ => (None, 0.0),
            };

            let material_cost = non_negative(weight_kg * price_per_kg);
            CoreCost {
                core_type: CoreType::Square,
                description,
                lamination_id: *lamination_id,
                resolved: lamination.is_some(),
                weight_kg,
                price_per_kg,
                material_cost,
                core_piece_name,
                core_piece_price,
                total_cost: non_negative(material_cost + core_piece_price),
            }
        }
        CoreInput::Round { price_per_kg, .. } => {
            let price_per_kg = non_negative(*price_per_kg);
            let material_cost = non_negative(weight_kg * price_per_kg);
            CoreCost {
                core_type: CoreType::Round,
                description: ROUND_CORE_LABEL.to_string(),
                lamination_id: None,
                resolved: true,
                weight_kg,
                price_per_kg,
                material_cost,
                core_piece_name: None,
                core_piece_price: 0.0,
                total_cost: material_cost,
            }
        }
    }
}
