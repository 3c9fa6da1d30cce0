//! Check evaluation and suite aggregation.
//!
//! A [`CheckSpec`] names one (schema, document, description) triple.
//! [`run_check`] evaluates it to a terminal [`CheckOutcome`]; every load
//! failure is folded into an outcome value rather than propagated, so a
//! suite of checks always runs to completion. [`SuiteSummary`] aggregates
//! the ordered results into the passed/total counts that drive the
//! printed summary and the process exit status.

use std::path::PathBuf;

use crate::document::Document;
use crate::error::CheckError;
use crate::schema::Schema;
use crate::violation::Violation;

/// One check in a suite: a schema, a candidate document, and a label.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    /// Human-readable label printed in the per-check banner.
    pub description: String,
    /// Path to the schema definition file.
    pub schema_path: PathBuf,
    /// Path to the candidate configuration file.
    pub document_path: PathBuf,
}

impl CheckSpec {
    /// Build a check spec.
    pub fn new(
        description: impl Into<String>,
        schema_path: impl Into<PathBuf>,
        document_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            description: description.into(),
            schema_path: schema_path.into(),
            document_path: document_path.into(),
        }
    }
}

/// Terminal state of one evaluated check.
///
/// `Pass` iff validation ran and returned an empty violation sequence;
/// the remaining variants are mutually exclusive failure modes
/// distinguished by why validation could not complete.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The document conforms to the schema.
    Pass,
    /// The document does not conform; carries the full violation sequence
    /// in deterministic traversal order.
    Fail(Vec<Violation>),
    /// The schema file could not be read.
    SchemaMissing {
        /// Diagnostic text for the report.
        reason: String,
    },
    /// The document file could not be read.
    DocumentMissing {
        /// Diagnostic text for the report.
        reason: String,
    },
    /// The schema or document was read but could not be parsed.
    LoadError {
        /// Diagnostic text for the report.
        reason: String,
    },
}

impl CheckOutcome {
    /// Whether this outcome counts toward `passed` in the summary.
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }
}

impl From<CheckError> for CheckOutcome {
    fn from(error: CheckError) -> Self {
        match error {
            CheckError::SchemaMissing { .. } => CheckOutcome::SchemaMissing {
                reason: error.to_string(),
            },
            CheckError::DocumentMissing { .. } => CheckOutcome::DocumentMissing {
                reason: error.to_string(),
            },
            CheckError::SchemaLoad { .. } | CheckError::DocumentLoad { .. } | CheckError::Io(_) => {
                CheckOutcome::LoadError {
                    reason: error.to_string(),
                }
            }
        }
    }
}

/// The evaluated result of one check. Immutable.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The check that was evaluated.
    pub spec: CheckSpec,
    /// The terminal outcome.
    pub outcome: CheckOutcome,
}

/// Evaluate a single check: load the schema, load the document, validate.
///
/// Infallible by construction: every failure mode becomes a
/// [`CheckOutcome`] variant. The schema and document are loaded fresh and
/// dropped when the check completes.
pub fn run_check(spec: &CheckSpec) -> CheckResult {
    let outcome = evaluate(spec);
    CheckResult {
        spec: spec.clone(),
        outcome,
    }
}

fn evaluate(spec: &CheckSpec) -> CheckOutcome {
    let schema = match Schema::from_path(&spec.schema_path) {
        Ok(schema) => schema,
        Err(e) => return e.into(),
    };
    let document = match Document::from_path(&spec.document_path) {
        Ok(document) => document,
        Err(e) => return e.into(),
    };

    let violations = schema.validate(&document);
    if violations.is_empty() {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail(violations)
    }
}

/// Aggregated outcome of an ordered list of checks.
#[derive(Debug)]
pub struct SuiteSummary {
    /// Per-check results, in suite order.
    pub results: Vec<CheckResult>,
    /// Number of checks whose outcome was `Pass`.
    pub passed: usize,
    /// Total number of checks evaluated.
    pub total: usize,
}

impl SuiteSummary {
    /// Fold an ordered result list into a summary.
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.outcome.is_pass()).count();
        Self {
            results,
            passed,
            total,
        }
    }

    /// True iff every check passed. An empty suite is vacuously all-pass.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}
