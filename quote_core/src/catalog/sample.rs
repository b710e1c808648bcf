//! Built-in sample catalog for demos and documentation.
//!
//! ```rust
//! use quote_core::catalog::sample::sample_catalog;
//! use quote_core::catalog::SpecId;
//!
//! let catalog = sample_catalog();
//! assert_eq!(catalog.lamination(SpecId(1)).map(|l| l.name.as_str()), Some("EI-66"));
//! ```

use once_cell::sync::Lazy;
use tracing::warn;

use super::Catalog;

const SAMPLE_CATALOG_JSON: &str = include_str!("sample_catalog.json");

/// Parsed once on first use.
pub static SAMPLE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(SAMPLE_CATALOG_JSON).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to parse built-in sample catalog, using an empty one");
        Catalog::default()
    })
});

pub fn sample_catalog() -> &'static Catalog {
    &SAMPLE_CATALOG
}
