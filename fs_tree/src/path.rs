//! Path splitting and resolution errors
//!
//! Paths are delimiter-separated strings resolved against a base directory.
//! The special segments `.` (stay), `..` (parent) and `~` (restart at root)
//! are handled during traversal, not here.

use crate::node::DELIMITER;
use thiserror::Error;

/// Errors that can occur during path resolution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Path is syntactically invalid
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A segment matched no child of the directory being walked
    #[error("Wrong path: no node named {0}")]
    SegmentNotFound(String),

    /// A non-final segment resolved to a leaf node
    #[error("Destination is not a directory: {0}")]
    NotADirectory(String),

    /// `..` was applied at the root, or a node chain was popped past the root
    #[error("Cannot ascend above the root directory")]
    AboveRoot,
}

/// Splits a path into segments
///
/// The empty path yields no segments and resolves to the base itself.
/// Empty segments (leading, trailing or doubled delimiters) are rejected.
///
/// # Examples
///
/// ```
/// use fs_tree::split_path;
///
/// let segments = split_path("./docs/notes").unwrap();
/// assert_eq!(segments, vec![".", "docs", "notes"]);
///
/// assert!(split_path("").unwrap().is_empty());
/// assert!(split_path("docs//notes").is_err());
/// ```
pub fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    let segments: Vec<&str> = path.split(DELIMITER).collect();

    for segment in &segments {
        if segment.is_empty() {
            return Err(PathError::InvalidPath(
                "path contains an empty segment".to_string(),
            ));
        }
    }

    Ok(segments)
}

/// Validates a node name
///
/// Names must be non-empty, must not contain the delimiter and must not
/// collide with the navigation segments `.`, `..` and `~`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && name != "~" && !name.contains(DELIMITER)
}
