//! # Error Types
//!
//! Structured error types for quote_core. The pricing functions themselves
//! never fail; errors come from the strict calculation path, settings
//! validation and the JSON file helpers.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{PriceError, PriceResult};
//!
//! fn validate_turn_length(turn_length_cm: f64) -> PriceResult<()> {
//!     if turn_length_cm <= 0.0 {
//!         return Err(PriceError::InvalidInput {
//!             field: "turn_length_cm".to_string(),
//!             value: turn_length_cm.to_string(),
//!             reason: "Turn length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::Diagnostic;

/// Result type alias for quote_core operations
pub type PriceResult<T> = Result<T, PriceError>;

/// Structured error type for pricing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PriceError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A catalog id does not resolve
    #[error("{kind} not found: {id}")]
    SpecNotFound { kind: String, id: String },

    /// Strict pricing found references that do not resolve
    #[error("{} unresolved reference(s) in quote", .diagnostics.len())]
    UnresolvedReferences { diagnostics: Vec<Diagnostic> },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl PriceError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PriceError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        PriceError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SpecNotFound error
    pub fn spec_not_found(kind: impl Into<String>, id: impl ToString) -> Self {
        PriceError::SpecNotFound {
            kind: kind.into(),
            id: id.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PriceError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        PriceError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PriceError::InvalidInput { .. } => "INVALID_INPUT",
            PriceError::MissingField { .. } => "MISSING_FIELD",
            PriceError::SpecNotFound { .. } => "SPEC_NOT_FOUND",
            PriceError::UnresolvedReferences { .. } => "UNRESOLVED_REFERENCES",
            PriceError::FileError { .. } => "FILE_ERROR",
            PriceError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PriceError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for PriceError {
    fn from(err: serde_json::Error) -> Self {
        PriceError::serialization(err.to_string())
    }
}
