use std::f64::consts::PI;

use proptest::prelude::*;
use quote_core::calculations::{
    calculate_accessory, calculate_core, calculate_quote, calculate_winding, AccessoryUsage, CoreInput, QuoteDraft,
    QuoteResult, WindingUsage,
};
use quote_core::catalog::{AccessorySpec, Catalog, LaminationSpec, SpecId, WindingSpec};
use quote_core::formulas::COPPER_WEIGHT_FACTOR;
use quote_core::numeric::parse_or_zero;
use quote_core::settings::PricingSettings;

const UNKNOWN: SpecId = SpecId(9_999);

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn catalog(lamination_price: f64, diameter_mm: f64, wire_price: f64, unit_price: f64) -> Catalog {
    Catalog::builder()
        .lamination(LaminationSpec::new(SpecId(1), "EI", lamination_price))
        .winding_spec(WindingSpec::new(SpecId(10), "Cu", diameter_mm, wire_price))
        .accessory(AccessorySpec::new(SpecId(20), "Part", unit_price))
        .build()
}

fn draft_strategy() -> impl Strategy<Value = QuoteDraft> {
    (
        0.0..50.0f64,
        proptest::collection::vec((0.0..2_000.0f64, any::<bool>()), 0..4),
        proptest::collection::vec(0.0..100.0f64, 0..4),
    )
        .prop_map(|(core_kg, windings, accessories)| {
            let mut draft = QuoteDraft::new("prop").with_core(CoreInput::square(Some(SpecId(1)), core_kg));
            for (amount, by_turns) in windings {
                draft = draft.with_winding(if by_turns {
                    WindingUsage::by_turn_count(Some(SpecId(10)), amount)
                } else {
                    WindingUsage::by_weight(Some(SpecId(10)), amount / 1_000.0)
                });
            }
            for quantity in accessories {
                draft = draft.with_accessory(AccessoryUsage::new(Some(SpecId(20)), quantity));
            }
            draft
        })
}

proptest! {
    #[test]
    fn square_core_is_weight_times_price(w in 0.0..1_000.0f64, p in 0.0..1_000_000.0f64) {
        let line = calculate_core(&CoreInput::square(Some(SpecId(1)), w), &catalog(p, 0.5, 1.0, 1.0), false);
        prop_assert_eq!(line.total_cost, w * p);
    }

    #[test]
    fn winding_cost_matches_formula(
        n in 0.0..5_000.0f64,
        turn_cm in 1.0..60.0f64,
        d in 0.05..5.0f64,
        p in 0.0..1_000_000.0f64,
    ) {
        let line = calculate_winding(
            &WindingUsage::by_turn_count(Some(SpecId(10)), n),
            &catalog(1.0, d, p, 1.0),
            turn_cm,
        );
        let expected = n * (turn_cm / 100.0) * PI * (d / 2.0).powi(2) * COPPER_WEIGHT_FACTOR * p;
        prop_assert!(close(line.cost, expected), "{} vs {}", line.cost, expected);
        prop_assert!(line.cost >= 0.0);
    }

    #[test]
    fn accessory_cost_is_linear(q in 0.0..10_000.0f64, unit_price in 0.0..1_000_000.0f64) {
        let catalog = catalog(1.0, 1.0, 1.0, unit_price);
        let one = calculate_accessory(&AccessoryUsage::new(Some(SpecId(20)), 1.0), &catalog);
        let many = calculate_accessory(&AccessoryUsage::new(Some(SpecId(20)), q), &catalog);
        prop_assert!(close(many.cost, q * one.cost));
    }

    #[test]
    fn total_is_sum_of_lines(draft in draft_strategy()) {
        let result = calculate_quote(&draft, &catalog(45_000.0, 0.35, 280_000.0, 5_000.0), &PricingSettings::default());
        let sum = result.core.total_cost
            + result.windings.iter().map(|w| w.cost).sum::<f64>()
            + result.accessories.iter().map(|a| a.cost).sum::<f64>();
        prop_assert!(close(result.total_cost, sum));
        prop_assert_eq!(result.windings.len(), draft.windings.len());
        prop_assert_eq!(result.accessories.len(), draft.accessories.len());
        if draft.windings.is_empty() && draft.accessories.is_empty() {
            prop_assert_eq!(result.total_cost, result.core.total_cost);
        }
    }

    #[test]
    fn unknown_ids_cost_nothing(draft in draft_strategy(), turns in 0.0..2_000.0f64, qty in 0.0..100.0f64) {
        let catalog = catalog(45_000.0, 0.35, 280_000.0, 5_000.0);
        let settings = PricingSettings::default();
        let base = calculate_quote(&draft, &catalog, &settings);

        let polluted = draft
            .clone()
            .with_winding(WindingUsage::by_turn_count(Some(UNKNOWN), turns))
            .with_accessory(AccessoryUsage::new(Some(UNKNOWN), qty));
        let result = calculate_quote(&polluted, &catalog, &settings);

        prop_assert_eq!(result.windings.last().map(|w| w.cost), Some(0.0));
        prop_assert_eq!(result.accessories.last().map(|a| a.cost), Some(0.0));
        prop_assert_eq!(&result.windings[..draft.windings.len()], &base.windings[..]);
        prop_assert_eq!(&result.accessories[..draft.accessories.len()], &base.accessories[..]);
        prop_assert_eq!(result.total_cost, base.total_cost);
    }

    #[test]
    fn pricing_is_idempotent(draft in draft_strategy()) {
        let catalog = catalog(45_000.0, 0.35, 280_000.0, 5_000.0);
        let settings = PricingSettings::default();
        let first = calculate_quote(&draft, &catalog, &settings);
        let second = calculate_quote(&draft, &catalog, &settings);
        prop_assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_line_is_finite_and_non_negative(
        w in any::<f64>(),
        n in any::<f64>(),
        q in any::<f64>(),
        d in prop_oneof![Just(0.0), 0.0..1e200f64, any::<f64>()],
        unit_price in prop_oneof![0.0..1e10f64, any::<f64>()],
        turn_cm in prop_oneof![Just(1e10), 0.0..1e300f64, any::<f64>()],
    ) {
        let catalog = catalog(45_000.0, d, 280_000.0, unit_price);
        let draft = QuoteDraft::new("hostile")
            .with_core(CoreInput::square(Some(SpecId(1)), w))
            .with_winding(WindingUsage::by_turn_count(Some(SpecId(10)), n))
            .with_winding(WindingUsage::by_weight(Some(SpecId(10)), w))
            .with_accessory(AccessoryUsage::new(Some(SpecId(20)), q))
            .with_turn_length(turn_cm);
        let result = calculate_quote(&draft, &catalog, &PricingSettings::default());

        let ok = |x: f64| x.is_finite() && x >= 0.0;
        prop_assert!(ok(result.core.total_cost));
        for line in &result.windings {
            prop_assert!(ok(line.calculated_weight_kg) && ok(line.cost), "{:?}", line);
            prop_assert!(line.length_m.map_or(true, ok));
        }
        prop_assert!(result.accessories.iter().all(|l| ok(l.cost)));
        prop_assert!(ok(result.winding_total) && ok(result.accessory_total));
        prop_assert!(ok(result.total_cost));
        let json = serde_json::to_string(&result).unwrap();
        prop_assert!(serde_json::from_str::<QuoteResult>(&json).is_ok(), "{}", json);
    }

    #[test]
    fn form_strings_never_parse_negative(s in ".{0,16}") {
        let value = parse_or_zero(&s);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }
}
