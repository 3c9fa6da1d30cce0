//! Configuration document loading.
//!
//! A [`Document`] is the decoded in-memory tree of one configuration file.
//! YAML files are parsed directly into `serde_json::Value` so that node
//! typing (string/number/boolean/null/sequence/mapping) is exact. Schema
//! rules discriminate on type, so a YAML `true` must not survive as the
//! string `"true"`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::CheckError;

/// A configuration file decoded into an in-memory value tree.
///
/// Immutable after load and owned by the check that loaded it. Loading the
/// same unchanged path twice yields structurally equal trees.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    root: Value,
}

impl Document {
    /// Load a document from a YAML or JSON file.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` parse as YAML,
    /// anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::DocumentMissing`] if the path cannot be read
    /// and [`CheckError::DocumentLoad`] if the content cannot be parsed.
    /// YAML mappings whose keys are not strings cannot be represented in
    /// the value tree and are rejected as a load failure.
    pub fn from_path(path: &Path) -> Result<Self, CheckError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CheckError::DocumentMissing {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let root: Value = match ext {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| CheckError::DocumentLoad {
                    path: path.display().to_string(),
                    reason: format!("YAML parse error: {e}"),
                })?
            }
            _ => serde_json::from_str(&content).map_err(|e| CheckError::DocumentLoad {
                path: path.display().to_string(),
                reason: format!("JSON parse error: {e}"),
            })?,
        };

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// The path this document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decoded value tree.
    pub fn root(&self) -> &Value {
        &self.root
    }
}
