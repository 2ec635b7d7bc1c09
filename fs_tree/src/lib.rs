//! # Filesystem Tree
//!
//! This crate provides the in-memory hierarchical namespace engine: a tree of
//! named nodes reachable through path strings.
//!
//! ## Design
//!
//! - Nodes live in an arena (`Tree`) keyed by stable [`NodeId`] handles
//! - A node references its parent by ID only; the arena owns every node
//! - The four node kinds are a tagged variant ([`NodePayload`]), not a class
//!   hierarchy; kind-specific operations fail on a mismatched variant
//! - Path resolution walks the tree segment by segment, with `.`, `..` and
//!   `~` (root) navigation
//! - Every mutating operation validates completely before touching the tree,
//!   so a failed call leaves no partial state behind

pub mod node;
pub mod path;
pub mod tree;

pub use node::{Node, NodeId, NodeKind, NodePayload, DELIMITER, DIR_MAX_ELEMS, MAX_BUF_FILE_SIZE};
pub use path::{is_valid_name, split_path, PathError};
pub use tree::{Tree, TreeError};
