//! # Winding Wire Formulas
//!
//! Geometry and weight formulas used to turn a winding's turn count into
//! wire weight. Kept in one place so the constants can be checked against
//! the shop's reference sheet.
//!
//! ## Notation
//!
//! - `d` = Wire diameter (mm)
//! - `A` = Wire cross-section (mm²)
//! - `N` = Turn count
//! - `L_t` = Average length of one turn (cm)
//! - `L` = Total wire length (m)
//! - `W` = Wire weight (kg)

use crate::units::{Centimeters, Meters, Millimeters, SqMillimeters};

/// Copper weight factor (kg per mm²·m of length).
///
/// Copper density 8960 kg/m³ with the mm² → m² conversion folded in:
/// 8960 × 10⁻⁶ = 0.00896. Fixed for every wire material.
pub const COPPER_WEIGHT_FACTOR: f64 = 0.00896;

/// Cross-sectional area of a round wire
///
/// # Formula
/// A = π × (d/2)²
///
/// # Example
/// ```rust
/// use quote_core::formulas::wire_area_mm2;
///
/// let area = wire_area_mm2(0.35);
/// assert!((area - 0.0962113).abs() < 1e-6);
/// ```
#[inline]
pub fn wire_area_mm2(diameter_mm: f64) -> f64 {
    SqMillimeters::of_round_wire(Millimeters(diameter_mm)).value()
}

/// Total wire length for a winding
///
/// # Formula
/// L = N × (L_t / 100)
///
/// # Example
/// ```rust
/// use quote_core::formulas::wire_length_m;
///
/// // 500 turns at 15 cm per turn
/// assert!((wire_length_m(500.0, 15.0) - 75.0).abs() < 1e-9);
/// ```
#[inline]
pub fn wire_length_m(turn_count: f64, turn_length_cm: f64) -> f64 {
    let per_turn: Meters = Centimeters(turn_length_cm).into();
    (per_turn * turn_count).value()
}

/// Wire weight from cross-section and length
///
/// # Formula
/// W = A × L × 0.00896
///
/// # Example
/// ```rust
/// use quote_core::formulas::{wire_area_mm2, wire_length_m, wire_weight_kg};
///
/// let w = wire_weight_kg(wire_area_mm2(0.35), wire_length_m(500.0, 15.0));
/// assert!((w - 0.064655).abs() < 1e-5);
/// ```
#[inline]
pub fn wire_weight_kg(area_mm2: f64, length_m: f64) -> f64 {
    area_mm2 * length_m * COPPER_WEIGHT_FACTOR
}
