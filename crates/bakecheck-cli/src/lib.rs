//! # bakecheck-cli — Configuration Conformance Checker
//!
//! Provides the `bakecheck` command-line interface. The binary validates
//! bake configuration files (`bake.yml`, `cookbook.yml`, recipe templates)
//! against the JSON schemas shipped in the repository's `schemas/`
//! directory and exits 0 only when every check passes.
//!
//! ```bash
//! bakecheck                              # run the default fixture suite
//! bakecheck path/to/bake.yml             # validate one file (schema inferred)
//! bakecheck doc.yml --schema cookbook.schema.json
//! ```

pub mod suite;

use std::path::{Path, PathBuf};

/// Walk up from the current directory to find the repository root.
///
/// The root is identified by the presence of both `schemas/` and
/// `resources/` directories. Check paths are resolved against this root
/// rather than the caller's working directory, so the suite behaves the
/// same from any subdirectory.
pub fn resolve_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join("schemas").is_dir() && dir.join("resources").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `root` resolves there; otherwise it is kept relative to the current
/// directory.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let root_relative = root.join(path);
    if root_relative.exists() {
        root_relative
    } else {
        path.to_path_buf()
    }
}
