//! Schema loading and document validation.
//!
//! A [`Schema`] wraps a compiled JSON Schema (Draft 2020-12) validator
//! built with the `jsonschema` crate. Schemas are loaded fresh for each
//! check, with no registry or cache, so reloading the same path yields
//! an equivalent but independent instance. Internal `$ref`s of the
//! form `#/$defs/<name>` are resolved by the `jsonschema` crate natively;
//! the bake schemas use no cross-file references.

use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;

use crate::document::Document;
use crate::error::CheckError;
use crate::violation::Violation;

/// A structural contract over configuration documents, compiled from a
/// `*.schema.json` file. Immutable once loaded.
pub struct Schema {
    path: PathBuf,
    compiled: Validator,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema").field("path", &self.path).finish()
    }
}

impl Schema {
    /// Load and compile a schema from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::SchemaMissing`] if the path cannot be read
    /// and [`CheckError::SchemaLoad`] if the content is not valid JSON or
    /// does not compile as a Draft 2020-12 schema.
    pub fn from_path(path: &Path) -> Result<Self, CheckError> {
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::SchemaMissing {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let raw: Value = serde_json::from_str(&content).map_err(|e| CheckError::SchemaLoad {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;

        let compiled = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(&raw)
            .map_err(|e| CheckError::SchemaLoad {
                path: path.display().to_string(),
                reason: format!("schema compile error: {e}"),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            compiled,
        })
    }

    /// The path this schema was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a document against this schema.
    ///
    /// Pure function of its inputs: no I/O, no external state. Returns the
    /// full violation sequence in the validator's document-traversal
    /// order, which is stable for identical inputs; an empty sequence
    /// means the document conforms.
    pub fn validate(&self, document: &Document) -> Vec<Violation> {
        self.compiled
            .iter_errors(document.root())
            .map(|e| Violation::from_pointer(&e.instance_path.to_string(), e.to_string()))
            .collect()
    }
}
