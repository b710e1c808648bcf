//! # Quote Aggregation
//!
//! Prices a whole draft: one core line, every winding, every accessory.
//!
//! ```text
//! Total = core + Σ windings + Σ accessories
//! ```
//!
//! [`calculate_quote`] never fails. References that do not resolve price at
//! zero, are logged, and are listed on the result when
//! `settings.report_unresolved` is on. [`calculate_quote_strict`] turns them
//! into an error instead.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "T-100 mains transformer",
//!   "customer_id": 3,
//!   "core": { "type": "SQUARE", "lamination_id": 1, "weight_kg": 2.0 },
//!   "windings": [
//!     { "spec_id": 10, "winding_type": "PRIMARY", "turn_count": 500 },
//!     { "spec_id": 11, "winding_type": "SECONDARY", "weight_kg": 0.5 }
//!   ],
//!   "accessories": [{ "accessory_id": 20, "quantity": 5 }],
//!   "turn_length_cm": 15
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::accessory::{calculate_accessory, AccessoryCost, AccessoryUsage};
use super::core_cost::{calculate_core, CoreCost, CoreInput, CoreType};
use super::winding::{calculate_winding, WindingCost, WindingUsage};
use super::{Diagnostic, DiagnosticKind, LineRef};
use crate::catalog::{optional_id, Catalog, SpecId};
use crate::errors::{PriceError, PriceResult};
use crate::numeric::{lenient_opt_f64, non_negative};
use crate::settings::PricingSettings;

/// Name given to drafts created without one
pub const DEFAULT_QUOTE_NAME: &str = "New transformer";

/// Everything the shop filled in for one transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDraft {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default, with = "optional_id", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<SpecId>,

    #[serde(default)]
    pub core: CoreInput,

    #[serde(default)]
    pub windings: Vec<WindingUsage>,

    #[serde(default)]
    pub accessories: Vec<AccessoryUsage>,

    /// Average turn length for this quote; the shop default applies when unset
    #[serde(default, with = "lenient_opt_f64", skip_serializing_if = "Option::is_none")]
    pub turn_length_cm: Option<f64>,
}

fn default_name() -> String {
    DEFAULT_QUOTE_NAME.to_string()
}

impl Default for QuoteDraft {
    fn default() -> Self {
        QuoteDraft::new(DEFAULT_QUOTE_NAME)
    }
}

impl QuoteDraft {
    pub fn new(name: impl Into<String>) -> Self {
        QuoteDraft {
            name: name.into(),
            customer_id: None,
            core: CoreInput::default(),
            windings: Vec::new(),
            accessories: Vec::new(),
            turn_length_cm: None,
        }
    }

    pub fn with_core(mut self, core: CoreInput) -> Self {
        self.core = core;
        self
    }

    pub fn with_winding(mut self, winding: WindingUsage) -> Self {
        self.windings.push(winding);
        self
    }

    pub fn with_accessory(mut self, accessory: AccessoryUsage) -> Self {
        self.accessories.push(accessory);
        self
    }

    pub fn with_customer(mut self, customer_id: SpecId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_turn_length(mut self, turn_length_cm: f64) -> Self {
        self.turn_length_cm = Some(turn_length_cm);
        self
    }
}

/// Itemized price of a draft.
///
/// Produced fresh on every calculation; identical inputs give identical
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub name: String,

    pub core_type: CoreType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<SpecId>,

    /// Turn length the windings were priced with
    pub turn_length_cm: f64,

    pub core: CoreCost,

    pub windings: Vec<WindingCost>,

    pub accessories: Vec<AccessoryCost>,

    pub core_total: f64,

    pub winding_total: f64,

    pub accessory_total: f64,

    /// core_total + winding_total + accessory_total
    pub total_cost: f64,

    /// Unresolved references, when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl QuoteResult {
    pub fn has_unresolved(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Price a draft against a catalog snapshot.
///
/// Always succeeds. Unknown ids contribute zero cost.
///
/// # Example
///
/// ```rust
/// use quote_core::calculations::{calculate_quote, AccessoryUsage, CoreInput, QuoteDraft};
/// use quote_core::catalog::{AccessorySpec, Catalog, LaminationSpec, SpecId};
/// use quote_core::settings::PricingSettings;
///
/// let catalog = Catalog::builder()
///     .lamination(LaminationSpec::new(SpecId(1), "EI-66", 45_000.0))
///     .accessory(AccessorySpec::new(SpecId(20), "Terminal", 5_000.0))
///     .build();
///
/// let draft = QuoteDraft::new("T-100")
///     .with_core(CoreInput::square(Some(SpecId(1)), 2.0))
///     .with_accessory(AccessoryUsage::new(Some(SpecId(20)), 3.0));
///
/// let result = calculate_quote(&draft, &catalog, &PricingSettings::default());
/// assert_eq!(result.core_total, 90_000.0);
/// assert_eq!(result.accessory_total, 15_000.0);
/// assert_eq!(result.total_cost, 105_000.0);
/// ```
pub fn calculate_quote(draft: &QuoteDraft, catalog: &Catalog, settings: &PricingSettings) -> QuoteResult {
    let (mut result, diagnostics) = price_draft(draft, catalog, settings);
    if settings.report_unresolved {
        result.diagnostics = diagnostics;
    }
    result
}

/// Price a draft, failing if any catalog reference does not resolve.
///
/// # Returns
///
/// * `Ok(QuoteResult)` - Every reference resolved
/// * `Err(PriceError::UnresolvedReferences)` - One or more did not
pub fn calculate_quote_strict(
    draft: &QuoteDraft,
    catalog: &Catalog,
    settings: &PricingSettings,
) -> PriceResult<QuoteResult> {
    let (result, diagnostics) = price_draft(draft, catalog, settings);
    if diagnostics.is_empty() {
        Ok(result)
    } else {
        Err(PriceError::UnresolvedReferences { diagnostics })
    }
}

fn price_draft(draft: &QuoteDraft, catalog: &Catalog, settings: &PricingSettings) -> (QuoteResult, Vec<Diagnostic>) {
    let turn_length_cm = settings.effective_turn_length_cm(draft.turn_length_cm);
    let mut diagnostics = Vec::new();

    let core = calculate_core(&draft.core, catalog, settings.include_core_piece_price);
    if let (false, Some(id)) = (core.resolved, core.lamination_id) {
        diagnostics.push(Diagnostic::new(LineRef::Core, DiagnosticKind::Lamination, id));
    }

    let windings: Vec<WindingCost> = draft
        .windings
        .iter()
        .map(|usage| calculate_winding(usage, catalog, turn_length_cm))
        .collect();
    for (index, line) in windings.iter().enumerate() {
        if let (false, Some(id)) = (line.resolved, line.spec_id) {
            diagnostics.push(Diagnostic::new(LineRef::Winding(index), DiagnosticKind::WindingSpec, id));
        }
    }

    let accessories: Vec<AccessoryCost> = draft
        .accessories
        .iter()
        .map(|usage| calculate_accessory(usage, catalog))
        .collect();
    for (index, line) in accessories.iter().enumerate() {
        if let (false, Some(id)) = (line.resolved, line.accessory_id) {
            diagnostics.push(Diagnostic::new(LineRef::Accessory(index), DiagnosticKind::Accessory, id));
        }
    }

    if let Some(id) = draft.customer_id {
        if catalog.customer(id).is_none() {
            diagnostics.push(Diagnostic::new(LineRef::Customer, DiagnosticKind::Customer, id));
        }
    }

    for diagnostic in &diagnostics {
        warn!(quote = %draft.name, "{diagnostic}");
    }

    let core_total = core.total_cost;
    let winding_total = non_negative(windings.iter().fold(0.0, |acc, w| acc + w.cost));
    let accessory_total = non_negative(accessories.iter().fold(0.0, |acc, a| acc + a.cost));
    let total_cost = non_negative(core_total + winding_total + accessory_total);

    debug!(
        quote = %draft.name,
        core_total,
        winding_total,
        accessory_total,
        total_cost,
        "priced quote"
    );

    let result = QuoteResult {
        name: draft.name.clone(),
        core_type: draft.core.core_type(),
        customer_id: draft.customer_id,
        turn_length_cm,
        core,
        windings,
        accessories,
        core_total,
        winding_total,
        accessory_total,
        total_cost,
        diagnostics: Vec::new(),
    };
    (result, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AccessorySpec, Customer, LaminationSpec, WindingSpec, WindingType};

    fn shop_catalog() -> Catalog {
        Catalog::builder()
            .lamination(LaminationSpec::new(SpecId(1), "EI-66", 45_000.0))
            .lamination(LaminationSpec::new(SpecId(2), "EI-76", 50_000.0).with_core("Bobbin EI-76", 10_000.0))
            .winding_spec(WindingSpec::new(SpecId(10), "Cu 0.35", 0.35, 280_000.0))
            .winding_spec(WindingSpec::new(SpecId(11), "Cu 1.2", 1.2, 200_000.0).with_type(WindingType::Secondary))
            .accessory(AccessorySpec::new(SpecId(20), "Bolt M4", 2_000.0))
            .accessory(AccessorySpec::new(SpecId(21), "Terminal", 5_000.0))
            .customer(Customer::new(SpecId(3), "Dien Co Minh Phat"))
            .build()
    }

    #[test]
    fn test_square_core_only() {
        let draft = QuoteDraft::new("core").with_core(CoreInput::square(Some(SpecId(1)), 2.0));
        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        assert_eq!(result.core_total, 90_000.0);
        assert_eq!(result.total_cost, 90_000.0);
        assert_eq!(result.core_type, CoreType::Square);
    }

    #[test]
    fn test_turn_count_winding() {
        let draft = QuoteDraft::new("winding").with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), 500.0));
        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        let line = &result.windings[0];
        assert_eq!(line.length_m, Some(75.0));
        assert!((line.calculated_weight_kg - 0.0646).abs() < 1e-4);
        assert!((result.total_cost - 18_103.11).abs() < 0.01);
    }

    #[test]
    fn test_accessory_only() {
        let draft = QuoteDraft::new("acc").with_accessory(AccessoryUsage::new(Some(SpecId(21)), 3.0));
        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        assert_eq!(result.accessories[0].cost, 15_000.0);
        assert_eq!(result.total_cost, 15_000.0);
    }

    #[test]
    fn test_empty_draft_is_zero() {
        let result = calculate_quote(&QuoteDraft::default(), &shop_catalog(), &PricingSettings::default());
        assert_eq!(result.total_cost, 0.0);
        assert!(result.windings.is_empty());
        assert!(result.accessories.is_empty());
        assert_eq!(result.name, DEFAULT_QUOTE_NAME);
    }

    #[test]
    fn test_unknown_winding_does_not_disturb_total() {
        let base = QuoteDraft::new("mixed")
            .with_core(CoreInput::square(Some(SpecId(1)), 2.0))
            .with_accessory(AccessoryUsage::new(Some(SpecId(20)), 5.0));
        let with_unknown = base.clone().with_winding(WindingUsage::by_turn_count(Some(SpecId(99)), 500.0));

        let settings = PricingSettings::default();
        let a = calculate_quote(&base, &shop_catalog(), &settings);
        let b = calculate_quote(&with_unknown, &shop_catalog(), &settings);

        assert_eq!(b.windings[0].cost, 0.0);
        assert_eq!(a.total_cost, b.total_cost);
        assert!(b.diagnostics.is_empty());
    }

    #[test]
    fn test_core_piece_scenario() {
        let draft = QuoteDraft::new("T-220")
            .with_core(CoreInput::square(Some(SpecId(2)), 2.0))
            .with_winding(WindingUsage::by_weight(Some(SpecId(11)), 0.5).with_type(WindingType::Secondary))
            .with_accessory(AccessoryUsage::new(Some(SpecId(20)), 5.0));

        let settings = PricingSettings::default().with_core_piece_price(true);
        let result = calculate_quote(&draft, &shop_catalog(), &settings);

        assert_eq!(result.core_total, 110_000.0);
        assert_eq!(result.winding_total, 100_000.0);
        assert_eq!(result.accessory_total, 10_000.0);
        assert_eq!(result.total_cost, 220_000.0);

        // Same draft without the bobbin
        let plain = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        assert_eq!(plain.total_cost, 210_000.0);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let draft = QuoteDraft::new("sum")
            .with_core(CoreInput::round(3.0, 60_000.0))
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), 320.0))
            .with_winding(WindingUsage::by_weight(Some(SpecId(11)), 0.8))
            .with_accessory(AccessoryUsage::new(Some(SpecId(20)), 4.0))
            .with_accessory(AccessoryUsage::new(Some(SpecId(21)), 2.0));
        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());

        let lines: f64 = result.core.total_cost
            + result.windings.iter().map(|w| w.cost).sum::<f64>()
            + result.accessories.iter().map(|a| a.cost).sum::<f64>();
        assert_eq!(result.total_cost, lines);
        assert_eq!(result.core_type, CoreType::Round);
    }

    #[test]
    fn test_draft_turn_length_overrides_default() {
        let draft = QuoteDraft::new("long turns")
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), 500.0))
            .with_turn_length(30.0);
        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        assert_eq!(result.turn_length_cm, 30.0);
        assert_eq!(result.windings[0].length_m, Some(150.0));
    }

    #[test]
    fn test_diagnostics_are_opt_in() {
        let draft = QuoteDraft::new("broken")
            .with_core(CoreInput::square(Some(SpecId(42)), 1.0))
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), 100.0))
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(99)), 100.0))
            .with_accessory(AccessoryUsage::new(Some(SpecId(77)), 1.0))
            .with_accessory(AccessoryUsage::new(None, 1.0))
            .with_customer(SpecId(8));

        let quiet = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        assert!(!quiet.has_unresolved());

        let settings = PricingSettings::default().with_diagnostics(true);
        let loud = calculate_quote(&draft, &shop_catalog(), &settings);
        assert_eq!(
            loud.diagnostics,
            vec![
                Diagnostic::new(LineRef::Core, DiagnosticKind::Lamination, SpecId(42)),
                Diagnostic::new(LineRef::Winding(1), DiagnosticKind::WindingSpec, SpecId(99)),
                Diagnostic::new(LineRef::Accessory(0), DiagnosticKind::Accessory, SpecId(77)),
                Diagnostic::new(LineRef::Customer, DiagnosticKind::Customer, SpecId(8)),
            ]
        );
        // Costs do not change with reporting
        assert_eq!(loud.total_cost, quiet.total_cost);
    }

    #[test]
    fn test_strict_mode() {
        let good = QuoteDraft::new("ok")
            .with_core(CoreInput::square(Some(SpecId(1)), 2.0))
            .with_customer(SpecId(3));
        let settings = PricingSettings::default();
        let strict = calculate_quote_strict(&good, &shop_catalog(), &settings).unwrap();
        assert_eq!(strict, calculate_quote(&good, &shop_catalog(), &settings));

        let bad = good.with_winding(WindingUsage::by_weight(Some(SpecId(99)), 1.0));
        match calculate_quote_strict(&bad, &shop_catalog(), &settings) {
            Err(PriceError::UnresolvedReferences { diagnostics }) => {
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].line, LineRef::Winding(0));
            }
            other => panic!("expected unresolved references, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let draft = QuoteDraft::new("again")
            .with_core(CoreInput::square(Some(SpecId(1)), 1.7))
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), 433.0));
        let catalog = shop_catalog();
        let settings = PricingSettings::default();
        let first = calculate_quote(&draft, &catalog, &settings);
        let second = calculate_quote(&draft, &catalog, &settings);
        assert_eq!(first, second);
        assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
    }

    #[test]
    fn test_draft_json() {
        let json = r#"{
            "name": "T-100",
            "customer_id": "3",
            "core": { "type": "SQUARE", "lamination_id": 1, "weight_kg": "2" },
            "windings": [
                { "spec_id": 10, "winding_type": "PRIMARY", "turn_count": 500 },
                { "spec_id": 11, "winding_type": "SECONDARY", "weight_kg": 0.5 }
            ],
            "accessories": [{ "accessory_id": 20, "quantity": 5 }],
            "turn_length_cm": ""
        }"#;
        let draft: QuoteDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.customer_id, Some(SpecId(3)));
        assert_eq!(draft.windings.len(), 2);
        assert_eq!(draft.turn_length_cm, None);

        let result = calculate_quote(&draft, &shop_catalog(), &PricingSettings::default());
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out["core_total"], 90_000.0);
        assert!(out.get("diagnostics").is_none());

        let minimal: QuoteDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(minimal, QuoteDraft::default());
    }
}
