//! Structured error types for schema and document loading.
//!
//! Each variant corresponds to one failure mode of a check. All variants
//! are caught at the per-check boundary (see [`crate::check::run_check`])
//! and converted into a terminal outcome; nothing propagates past the
//! suite runner.

use thiserror::Error;

/// Errors raised while preparing a check for validation.
///
/// A validation *failure* is not an error: it is the expected negative
/// result of a check and is reported as [`crate::CheckOutcome::Fail`].
#[derive(Error, Debug)]
pub enum CheckError {
    /// The schema path does not resolve to a readable file.
    #[error("schema not found: {path}: {reason}")]
    SchemaMissing {
        /// Path to the schema that could not be read.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema file was read but could not be parsed or compiled.
    #[error("failed to load schema {path}: {reason}")]
    SchemaLoad {
        /// Path to the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The document path does not resolve to a readable file.
    #[error("document not found: {path}: {reason}")]
    DocumentMissing {
        /// Path to the document that could not be read.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The document file was read but could not be parsed.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoad {
        /// Path to the document that failed to parse.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// I/O error outside the read paths covered above.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
