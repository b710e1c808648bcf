//! # Cost Calculations
//!
//! Each cost line follows the pattern:
//!
//! - `*Input` / `*Usage` - What the draft asks for (JSON-serializable)
//! - `*Cost` - The priced line (JSON-serializable)
//! - `calculate_*(input, catalog, ..) -> *Cost` - Pure, total function
//!
//! Line functions never fail. An id that does not resolve prices at zero
//! and is reported as a [`Diagnostic`] when asked for.
//!
//! ## Available Calculations
//!
//! - [`core_cost`] - Square (lamination) and round core cost
//! - [`winding`] - Winding wire cost by turn count or by weight
//! - [`accessory`] - Accessory cost by quantity
//! - [`quote`] - Aggregation into a [`QuoteResult`]

pub mod accessory;
pub mod core_cost;
pub mod quote;
pub mod winding;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::SpecId;

// Re-export commonly used types
pub use self::accessory::{calculate_accessory, AccessoryCost, AccessoryUsage};
pub use self::core_cost::{calculate_core, CoreCost, CoreInput, CoreType};
pub use self::quote::{calculate_quote, calculate_quote_strict, QuoteDraft, QuoteResult};
pub use self::winding::{calculate_winding, WindingCost, WindingQuantity, WindingUsage};

/// Name shown for lines whose catalog entry could not be found
pub const UNKNOWN_NAME: &str = "Unknown";

/// Which part of the draft a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "line", content = "index", rename_all = "snake_case")]
pub enum LineRef {
    Core,
    Winding(usize),
    Accessory(usize),
    Customer,
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Core => write!(f, "core"),
            LineRef::Winding(i) => write!(f, "winding #{}", i + 1),
            LineRef::Accessory(i) => write!(f, "accessory #{}", i + 1),
            LineRef::Customer => write!(f, "customer"),
        }
    }
}

/// Catalog kind a reference was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    Lamination,
    WindingSpec,
    Accessory,
    Customer,
}

impl DiagnosticKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DiagnosticKind::Lamination => "Lamination",
            DiagnosticKind::WindingSpec => "Winding spec",
            DiagnosticKind::Accessory => "Accessory",
            DiagnosticKind::Customer => "Customer",
        }
    }
}

/// A reference in the draft that the catalog snapshot could not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: LineRef,
    pub kind: DiagnosticKind,
    pub id: SpecId,
}

impl Diagnostic {
    pub fn new(line: LineRef, kind: DiagnosticKind, id: SpecId) -> Self {
        Diagnostic { line, kind, id }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} not found", self.line, self.kind.display_name(), self.id)
    }
}
