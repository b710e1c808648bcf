//! # quote_core - Transformer Cost Calculation Engine
//!
//! `quote_core` prices a transformer draft (core, windings, accessories)
//! against a read-only catalog snapshot. All inputs and outputs are
//! JSON-serializable so the surrounding form layer, the datasheet export and
//! any persistence service can consume them without conversion.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a draft and return a new result
//! - **Fail-soft**: Unknown catalog ids and bad numbers price at zero
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Itemized**: Every cost line stays inspectable, not just the total
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::catalog::{Catalog, LaminationSpec, SpecId};
//! use quote_core::calculations::{calculate_quote, CoreInput, QuoteDraft};
//! use quote_core::settings::PricingSettings;
//!
//! let catalog = Catalog::builder()
//!     .lamination(LaminationSpec::new(SpecId(1), "EI-66", 45_000.0))
//!     .build();
//!
//! let draft = QuoteDraft::new("T-100")
//!     .with_core(CoreInput::square(Some(SpecId(1)), 2.0));
//!
//! let quote = calculate_quote(&draft, &catalog, &PricingSettings::default());
//! assert_eq!(quote.total_cost, 90_000.0);
//!
//! // Serialize to JSON for the datasheet or storage
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Core, winding and accessory pricing plus quote aggregation
//! - [`catalog`] - Catalog snapshot types and typed id lookup
//! - [`formulas`] - Wire geometry and weight formulas
//! - [`numeric`] - Lenient number parsing for form input
//! - [`settings`] - Shop-configurable pricing defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`export`] - Export envelope for finished quotes
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON loading and atomic export writes

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod formulas;
pub mod numeric;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_quote, calculate_quote_strict, QuoteDraft, QuoteResult};
pub use catalog::{Catalog, SpecId};
pub use errors::{PriceError, PriceResult};
pub use export::QuoteExport;
pub use file_io::{load_catalog, load_draft, load_settings, save_export};
pub use settings::PricingSettings;
