//! # Namespace Service
//!
//! This service anchors a [`fs_tree::Tree`] to a root and a current working
//! directory, and exposes the path-string operations adapters call.
//!
//! ## Operations
//!
//! - `node_info(path)`: resolve a path and describe the node
//! - `change_working_directory(path)`: retarget the cwd pointer
//! - `create_directory` / `create_binary_file` / `create_log_file` /
//!   `create_buffer`: resolve a parent directory, then create
//! - `move_node(src, dest)`: relocate a node between directories
//! - `delete(path)`: remove a node and its subtree
//! - `read` / `append_log` / `push_buffer` / `pop_buffer`: leaf content ops
//!
//! Every operation resolves relative to the cwd unless the path re-anchors
//! itself with `~`. All errors surface synchronously; nothing is retried and
//! no partial mutation survives a failure.

pub mod operations;
pub mod service;

pub use operations::{NamespaceOperations, NodeInfo, OperationError};
pub use service::NamespaceService;
