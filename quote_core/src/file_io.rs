//! # File I/O Module
//!
//! JSON documents the engine reads and writes:
//! - **Catalog snapshot**: `{ laminations, winding_specs, accessories, customers }`
//! - **Settings**: [`PricingSettings`], validated on load
//! - **Draft**: one [`QuoteDraft`]
//! - **Export**: [`QuoteExport`], written atomically and version-checked on load
//!
//! ## Example
//!
//! ```rust,no_run
//! use quote_core::calculate_quote;
//! use quote_core::export::QuoteExport;
//! use quote_core::file_io::{load_catalog, load_draft, load_settings, save_export};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("catalog.json"))?;
//! let settings = load_settings(Path::new("settings.json"))?;
//! let draft = load_draft(Path::new("draft.json"))?;
//!
//! let result = calculate_quote(&draft, &catalog, &settings);
//! let export = QuoteExport::new(draft, result, &catalog, &settings);
//! save_export(&export, Path::new("T-100.quote.json"))?;
//! # Ok::<(), quote_core::errors::PriceError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::calculations::QuoteDraft;
use crate::catalog::Catalog;
use crate::errors::{PriceError, PriceResult};
use crate::export::{QuoteExport, SCHEMA_VERSION};
use crate::settings::PricingSettings;

/// Read and parse a JSON document.
fn read_json<T: DeserializeOwned>(path: &Path) -> PriceResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PriceError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| PriceError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Load a catalog snapshot.
///
/// Duplicate ids keep the first record.
pub fn load_catalog(path: &Path) -> PriceResult<Catalog> {
    let catalog: Catalog = read_json(path)?;
    debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Load pricing settings. Missing fields take their defaults.
///
/// # Returns
///
/// * `Ok(PricingSettings)` - Parsed and valid
/// * `Err(PriceError::InvalidInput)` / `Err(PriceError::MissingField)` - Parsed but unusable
/// * `Err(PriceError::SerializationError)` - Invalid JSON
/// * `Err(PriceError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> PriceResult<PricingSettings> {
    let settings: PricingSettings = read_json(path)?;
    settings.validate()?;
    Ok(settings)
}

/// Load a quote draft.
pub fn load_draft(path: &Path) -> PriceResult<QuoteDraft> {
    read_json(path)
}

/// Save an export with atomic write semantics.
///
/// The save process:
/// 1. Serialize to pretty JSON
/// 2. Write to a temporary file next to the target (`.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
///
/// An interrupted save leaves any previous file at `path` intact.
pub fn save_export(export: &QuoteExport, path: &Path) -> PriceResult<()> {
    let json = serde_json::to_string_pretty(export)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        PriceError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| PriceError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))
        .and_then(|_| {
            tmp_file
                .sync_all()
                .map_err(|e| PriceError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))
        });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PriceError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), id = %export.id, total = export.result.total_cost, "saved quote export");
    Ok(())
}

/// Load a previously saved export.
///
/// # Returns
///
/// * `Ok(QuoteExport)` - Successfully loaded
/// * `Err(PriceError::VersionMismatch)` - Written by an incompatible version
/// * `Err(PriceError::SerializationError)` - Invalid JSON
/// * `Err(PriceError::FileError)` - I/O error
pub fn load_export(path: &Path) -> PriceResult<QuoteExport> {
    let export: QuoteExport = read_json(path)?;
    validate_version(&export.schema_version)?;
    Ok(export)
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> PriceResult<()> {
    let mismatch = || PriceError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
