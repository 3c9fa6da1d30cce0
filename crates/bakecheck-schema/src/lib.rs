//! # bakecheck-schema — Schema Validation Engine
//!
//! Validates bake configuration documents (`bake.yml`, `cookbook.yml`,
//! recipe templates) against JSON Schema (Draft 2020-12) definitions.
//!
//! ## Design
//!
//! The engine is a pipeline of small, independently testable pieces:
//!
//! - [`Schema`] — a compiled JSON Schema loaded from a `*.schema.json` file.
//! - [`Document`] — a YAML or JSON configuration file decoded into an
//!   in-memory value tree.
//! - [`Schema::validate`] — applies a schema to a document and returns the
//!   full [`Violation`] sequence in deterministic traversal order.
//! - [`run_check`] — evaluates one (schema, document, description) triple
//!   and folds every failure mode into a terminal [`CheckOutcome`].
//! - [`SuiteSummary`] — aggregates an ordered list of [`CheckResult`]s into
//!   the passed/total counts that drive the process exit status.
//!
//! ## Reporting policy
//!
//! Validation collects *all* violations per document so callers can choose
//! their own reporting depth; the `bakecheck` CLI reports only the first
//! violation per failed check. The violation order is the validator's
//! document-traversal order and is stable for identical inputs, so
//! first-violation reporting is reproducible.
//!
//! ## Error boundary
//!
//! Nothing in this crate panics on malformed input. Load failures are
//! structured [`CheckError`] values; validation failures are not errors at
//! all but an expected negative result carried in [`CheckOutcome::Fail`].

pub mod check;
pub mod document;
pub mod error;
pub mod schema;
pub mod violation;

pub use check::{run_check, CheckOutcome, CheckResult, CheckSpec, SuiteSummary};
pub use document::Document;
pub use error::CheckError;
pub use schema::Schema;
pub use violation::{PathSegment, Violation};
