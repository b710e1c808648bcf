//! Plain-text datasheet printing.

use quote_core::catalog::Catalog;
use quote_core::{PricingSettings, QuoteResult};

const RULE: &str = "═══════════════════════════════════════════════════════";

fn money(amount: f64, currency: &str) -> String {
    format!("{:>14.0} {}", amount, currency)
}

pub fn print_catalog(catalog: &Catalog) {
    println!("  Laminations:");
    for l in catalog.laminations() {
        println!("    [{}] {:<12} {:>8.0}/kg", l.id, l.name, l.price_per_kg);
    }
    println!("  Winding wire:");
    for w in catalog.winding_specs() {
        println!(
            "    [{}] {:<12} {:>5.2} mm {:<8} {:>8.0}/kg",
            w.id,
            w.name,
            w.diameter_mm,
            w.material.display_name(),
            w.price_per_kg
        );
    }
    println!("  Accessories:");
    for a in catalog.accessories() {
        println!("    [{}] {:<18} {:>8.0}/{}", a.id, a.name, a.unit_price, a.unit_type.symbol());
    }
}

pub fn print_quote(result: &QuoteResult, catalog: &Catalog, settings: &PricingSettings) {
    let currency = settings.currency.as_str();

    println!("{}", RULE);
    println!("  QUOTE: {}", result.name);
    if let Some(id) = result.customer_id {
        match catalog.customer(id) {
            Some(customer) => println!("  Customer: {}", customer.name),
            None => println!("  Customer: #{} (not in catalog)", id),
        }
    }
    println!("{}", RULE);
    println!();

    let core = &result.core;
    println!("Core ({}):", result.core_type.display_name());
    println!(
        "  {:<28} {:>6.2} kg x {:>8.0} {}",
        core.description,
        core.weight_kg,
        core.price_per_kg,
        money(core.material_cost, currency)
    );
    if let Some(piece) = &core.core_piece_name {
        println!("  {:<48} {}", piece, money(core.core_piece_price, currency));
    }
    println!();

    if !result.windings.is_empty() {
        println!("Windings (turn length {:.1} cm):", result.turn_length_cm);
        for line in &result.windings {
            let amount = match (line.turn_count, line.length_m) {
                (Some(turns), Some(length)) => format!("{:.0} turns, {:.1} m", turns, length),
                _ => "by weight".to_string(),
            };
            println!(
                "  {:<10} {:<12} {:<20} {:>7.4} kg {}",
                line.winding_type.display_name(),
                line.name,
                amount,
                line.calculated_weight_kg,
                money(line.cost, currency)
            );
        }
        println!();
    }

    if !result.accessories.is_empty() {
        println!("Accessories:");
        for line in &result.accessories {
            let unit = line.unit_type.map(|u| u.symbol()).unwrap_or("-");
            println!(
                "  {:<24} {:>8.2} {:<3} x {:>8.0} {}",
                line.name,
                line.quantity,
                unit,
                line.unit_price,
                money(line.cost, currency)
            );
        }
        println!();
    }

    println!("{}", RULE);
    println!("  Core        {}", money(result.core_total, currency));
    println!("  Windings    {}", money(result.winding_total, currency));
    println!("  Accessories {}", money(result.accessory_total, currency));
    println!("  TOTAL       {}", money(result.total_cost, currency));
    println!("{}", RULE);

    if result.has_unresolved() {
        println!();
        println!("Unresolved references:");
        for diagnostic in &result.diagnostics {
            println!("  [WARN] {}", diagnostic);
        }
    }
}
