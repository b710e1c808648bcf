//! # Unit Types
//!
//! Type-safe wrappers for the wire formulas. These are plain `f64` newtypes
//! that serialize as bare numbers, so JSON payloads stay clean.
//!
//! - Length: millimeters (wire diameter), centimeters (turn length), meters (wire length)
//! - Area: square millimeters (wire cross-section)
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Centimeters, Meters, Millimeters, SqMillimeters};
//!
//! let turn = Centimeters(15.0);
//! let turn_m: Meters = turn.into();
//! assert_eq!(turn_m.0, 0.15);
//!
//! let area = SqMillimeters::of_round_wire(Millimeters(2.0));
//! assert!((area.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

/// Scale a per-turn length by a turn count
impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMillimeters(pub f64);

impl SqMillimeters {
    /// Cross-section of a round wire: π × (d/2)²
    pub fn of_round_wire(diameter: Millimeters) -> Self {
        let radius = diameter.0 / 2.0;
        SqMillimeters(std::f64::consts::PI * radius * radius)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}
