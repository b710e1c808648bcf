//! # Quote Export
//!
//! A finished quote packaged for the persistence collaborator: the raw
//! draft, its priced result and the resolved customer, stamped with an id,
//! a schema version and a generation time.
//!
//! Numbers stay plain JSON numbers; currency formatting is left to the
//! presentation layer.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::{calculate_quote, CoreInput, QuoteDraft};
//! use quote_core::catalog::sample::sample_catalog;
//! use quote_core::catalog::SpecId;
//! use quote_core::export::{QuoteExport, SCHEMA_VERSION};
//! use quote_core::settings::PricingSettings;
//!
//! let catalog = sample_catalog();
//! let settings = PricingSettings::default();
//! let draft = QuoteDraft::new("T-100")
//!     .with_customer(SpecId(2))
//!     .with_core(CoreInput::square(Some(SpecId(1)), 2.0));
//! let result = calculate_quote(&draft, catalog, &settings);
//!
//! let export = QuoteExport::new(draft, result, catalog, &settings);
//! assert_eq!(export.schema_version, SCHEMA_VERSION);
//! assert_eq!(export.customer.as_ref().map(|c| c.name.as_str()), Some("Dien May Co."));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{QuoteDraft, QuoteResult};
use crate::catalog::{Catalog, Customer};
use crate::settings::PricingSettings;

/// Current schema version for export files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Export envelope for one priced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteExport {
    /// Unique id for this export
    pub id: Uuid,

    /// Schema version (for migration)
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Currency code the prices are in
    pub currency: String,

    /// Customer the quote is for, if the draft named one that resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    pub draft: QuoteDraft,

    pub result: QuoteResult,
}

impl QuoteExport {
    /// Wrap a draft and its result, resolving the customer from the catalog.
    pub fn new(draft: QuoteDraft, result: QuoteResult, catalog: &Catalog, settings: &PricingSettings) -> Self {
        let customer = draft.customer_id.and_then(|id| catalog.customer(id)).cloned();
        QuoteExport {
            id: Uuid::new_v4(),
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            currency: settings.currency.clone(),
            customer,
            draft,
            result,
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.result.total_cost
    }
}
