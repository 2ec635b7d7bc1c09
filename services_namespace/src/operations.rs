//! Namespace operations
//!
//! This module defines the operations the namespace service provides, the
//! error type adapters see, and the wire-facing node description.

use fs_tree::{NodeKind, PathError, TreeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during namespace operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    /// Path resolution error
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Tree mutation or leaf operation error
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Operation expected a directory and got a leaf
    #[error("Destination is not a directory: {0}")]
    NotADirectory(String),
}

/// Wire-facing description of a node
///
/// `path` holds the ancestor names from the root down to the immediate
/// parent; the root itself carries an empty sequence. `childs` is present
/// for directories only (insertion order), `length` for buffer files only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Node name
    pub name: String,
    /// Node kind tag
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ancestor names, root first
    pub path: Vec<String>,
    /// Child names, directories only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub childs: Option<Vec<String>>,
    /// Item count, buffer files only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

/// Namespace operations trait
///
/// Implemented by [`crate::NamespaceService`]; adapters depend on this trait
/// so a service instance can be injected rather than reached through globals.
pub trait NamespaceOperations {
    /// Resolves a path relative to the cwd and describes the node
    fn node_info(&self, path: &str) -> Result<NodeInfo, OperationError>;

    /// Retargets the cwd to the directory at `path`
    fn change_working_directory(&mut self, path: &str) -> Result<(), OperationError>;

    /// Lists the child names of the cwd
    fn list_cwd(&self) -> Result<Vec<String>, OperationError>;

    /// Renders the subtree under the cwd as an indented listing
    fn render_tree(&self) -> Result<String, OperationError>;

    /// Returns the cwd as a path string (`~`, `~/Dir_1`, ...)
    fn cwd_path(&self) -> String;

    /// Creates a directory named `name` under the directory at `path`
    fn create_directory(&mut self, path: &str, name: &str) -> Result<NodeInfo, OperationError>;

    /// Creates a binary file with fixed content under the directory at `path`
    fn create_binary_file(
        &mut self,
        path: &str,
        name: &str,
        content: &str,
    ) -> Result<NodeInfo, OperationError>;

    /// Creates a log file with initial content under the directory at `path`
    fn create_log_file(
        &mut self,
        path: &str,
        name: &str,
        content: &str,
    ) -> Result<NodeInfo, OperationError>;

    /// Creates an empty buffer file under the directory at `path`
    fn create_buffer(&mut self, path: &str, name: &str) -> Result<NodeInfo, OperationError>;

    /// Moves the node at `src_path` into the directory at `dest_path`
    ///
    /// Returns the destination directory's description.
    fn move_node(&mut self, src_path: &str, dest_path: &str)
        -> Result<NodeInfo, OperationError>;

    /// Deletes the node at `path` along with its subtree
    ///
    /// Returns the description of the removed node. If the cwd was inside
    /// the deleted subtree it is reset to the root.
    fn delete(&mut self, path: &str) -> Result<NodeInfo, OperationError>;

    /// Reads the content of the binary or log file at `path`
    fn read(&self, path: &str) -> Result<String, OperationError>;

    /// Appends text to the log file at `path`, returning the new content
    fn append_log(&mut self, path: &str, text: &str) -> Result<String, OperationError>;

    /// Pushes an item onto the buffer file at `path`
    ///
    /// Returns the buffer's description with its updated length.
    fn push_buffer(&mut self, path: &str, item: &str) -> Result<NodeInfo, OperationError>;

    /// Pops the most recently pushed item from the buffer file at `path`
    fn pop_buffer(&mut self, path: &str) -> Result<String, OperationError>;
}
