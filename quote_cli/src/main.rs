//! # Transformer Quote CLI
//!
//! Prices a quote draft against a catalog snapshot and prints the itemized
//! datasheet plus the result as JSON.
//!
//! ```text
//! quote_cli quote --catalog catalog.json --draft draft.json [--settings settings.json]
//!                 [--export out.json] [--strict]
//! quote_cli demo
//! ```
//!
//! Logging goes to stderr. `-v` raises the level; `RUST_LOG` overrides it.

mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use quote_core::calculations::{AccessoryUsage, CoreInput, WindingUsage};
use quote_core::catalog::sample::sample_catalog;
use quote_core::catalog::{Catalog, SpecId, WindingType};
use quote_core::errors::PriceResult;
use quote_core::{
    calculate_quote, calculate_quote_strict, load_catalog, load_draft, load_settings, save_export, PriceError,
    PricingSettings, QuoteDraft, QuoteExport, QuoteResult,
};

#[derive(Parser, Debug)]
#[command(name = "quote_cli", version, about = "Transformer cost calculator")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a draft file against a catalog file
    Quote {
        /// Catalog snapshot (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Quote draft (JSON)
        #[arg(long)]
        draft: PathBuf,

        /// Pricing settings (JSON); defaults apply when omitted
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Write the export envelope to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Fail when any catalog reference does not resolve
        #[arg(long)]
        strict: bool,
    },
    /// Interactive demo against the built-in sample catalog
    Demo,
}

fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_id(prompt: &str, default: u64) -> SpecId {
    let value = prompt_f64(prompt, default as f64);
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        SpecId(value as u64)
    } else {
        SpecId(default)
    }
}

fn run_quote(
    catalog_path: PathBuf,
    draft_path: PathBuf,
    settings_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
    strict: bool,
) -> PriceResult<QuoteResult> {
    let catalog = load_catalog(&catalog_path)?;
    let draft = load_draft(&draft_path)?;
    let settings = match settings_path {
        Some(path) => load_settings(&path)?,
        None => PricingSettings::default(),
    };
    debug!(entries = catalog.len(), quote = %draft.name, "inputs loaded");

    let result = if strict {
        calculate_quote_strict(&draft, &catalog, &settings)?
    } else {
        calculate_quote(&draft, &catalog, &settings)
    };

    report::print_quote(&result, &catalog, &settings);

    if let Some(path) = export_path {
        let export = QuoteExport::new(draft, result.clone(), &catalog, &settings);
        save_export(&export, &path)?;
        println!();
        println!("Export written to {} (id {})", path.display(), export.id);
    }

    Ok(result)
}

fn run_demo() -> PriceResult<QuoteResult> {
    let catalog: &Catalog = sample_catalog();
    let settings = PricingSettings::default().with_diagnostics(true);

    println!("Sample catalog:");
    report::print_catalog(catalog);
    println!();

    let lamination_id = prompt_id("Lamination id [1]: ", 1);
    if catalog.lamination(lamination_id).is_none() {
        return Err(PriceError::spec_not_found("Lamination", lamination_id));
    }
    let core_kg = prompt_f64("Core weight (kg) [2.0]: ", 2.0);
    let wire_id = prompt_id("Primary wire id [10]: ", 10);
    let turns = prompt_f64("Primary turns [500]: ", 500.0);
    let secondary_id = prompt_id("Secondary wire id [12]: ", 12);
    let secondary_kg = prompt_f64("Secondary wire weight (kg) [0.5]: ", 0.5);
    let accessory_id = prompt_id("Accessory id [20]: ", 20);
    let quantity = prompt_f64("Accessory quantity [5]: ", 5.0);

    let draft = QuoteDraft::new("CLI demo")
        .with_core(CoreInput::square(Some(lamination_id), core_kg))
        .with_winding(WindingUsage::by_turn_count(Some(wire_id), turns))
        .with_winding(WindingUsage::by_weight(Some(secondary_id), secondary_kg).with_type(WindingType::Secondary))
        .with_accessory(AccessoryUsage::new(Some(accessory_id), quantity));

    println!();
    let result = calculate_quote(&draft, catalog, &settings);
    report::print_quote(&result, catalog, &settings);
    Ok(result)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Quote {
            catalog,
            draft,
            settings,
            export,
            strict,
        } => run_quote(catalog, draft, settings, export, strict),
        Command::Demo => run_demo(),
    };

    match outcome {
        Ok(result) => {
            println!();
            println!("JSON Output:");
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => error!(error = %e, "failed to serialize result"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let PriceError::UnresolvedReferences { diagnostics } = &e {
                for diagnostic in diagnostics {
                    eprintln!("  - {}", diagnostic);
                }
            }
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
