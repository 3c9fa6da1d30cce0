//! Violation paths and diagnostic rendering.

use std::fmt;

/// One step of a violation path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A mapping key.
    Key(String),
    /// A zero-based sequence index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A single point of disagreement between a document and a schema.
///
/// Carries the full traversal path from the document root to the offending
/// node plus a human-readable message. A missing required field is reported
/// at its *containing* object, since the field itself has no node to point
/// at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path from the document root to the offending node.
    pub path: Vec<PathSegment>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    /// Build a violation from a JSON Pointer (e.g. `/tasks/2/command`)
    /// and a message.
    ///
    /// An empty pointer means the document root. Numeric reference tokens
    /// are treated as sequence indices.
    pub fn from_pointer(pointer: &str, message: impl Into<String>) -> Self {
        Self {
            path: parse_pointer(pointer),
            message: message.into(),
        }
    }

    /// Render the path as an arrow-joined segment list, e.g.
    /// `tasks -> 2 -> command`. An empty path renders as the explicit
    /// `(document root)` marker, never as an empty string.
    pub fn display_path(&self) -> String {
        if self.path.is_empty() {
            return "(document root)".to_string();
        }
        self.path
            .iter()
            .map(|segment| segment.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_path(), self.message)
    }
}

/// Split a JSON Pointer into path segments, unescaping `~1` and `~0`
/// per RFC 6901. Purely numeric tokens become sequence indices.
fn parse_pointer(pointer: &str) -> Vec<PathSegment> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .split('/')
        .skip(1)
        .map(|token| {
            let token = token.replace("~1", "/").replace("~0", "~");
            match token.parse::<usize>() {
                Ok(index) => PathSegment::Index(index),
                Err(_) => PathSegment::Key(token),
            }
        })
        .collect()
}
