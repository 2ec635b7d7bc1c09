//! Node model: identifiers, kinds and payloads
//!
//! A node is a name plus a kind-specific payload. Directories hold an ordered
//! child list; the three leaf kinds hold their own content.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum number of children a directory may hold.
pub const DIR_MAX_ELEMS: usize = 10;

/// Maximum number of items a buffer file may hold.
pub const MAX_BUF_FILE_SIZE: usize = 15;

/// Path segment separator.
pub const DELIMITER: char = '/';

/// Unique identifier for a node in the tree arena
///
/// IDs stay stable for the lifetime of the node; deleting a node invalidates
/// its ID and the IDs of everything beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// The four node kinds
///
/// Serialized form matches the wire contract: `directory`, `binary`,
/// `logfile`, `buffer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Ordered, name-unique child collection
    #[serde(rename = "directory")]
    Directory,
    /// Fixed content, set at creation
    #[serde(rename = "binary")]
    Binary,
    /// Append-only text content
    #[serde(rename = "logfile")]
    Log,
    /// Bounded LIFO stack of string items
    #[serde(rename = "buffer")]
    Buffer,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Directory => "directory",
            NodeKind::Binary => "binary",
            NodeKind::Log => "logfile",
            NodeKind::Buffer => "buffer",
        };
        write!(f, "{}", s)
    }
}

/// Kind-specific node payload
#[derive(Debug, Clone)]
pub enum NodePayload {
    /// Child IDs in insertion order
    Directory { children: Vec<NodeId> },
    /// Immutable content
    Binary { content: String },
    /// Monotonically growing content
    Log { content: String },
    /// LIFO items, newest last
    Buffer { items: Vec<String> },
}

impl NodePayload {
    /// Creates an empty directory payload
    pub fn directory() -> Self {
        NodePayload::Directory {
            children: Vec::new(),
        }
    }

    /// Creates an empty buffer payload
    pub fn buffer() -> Self {
        NodePayload::Buffer { items: Vec::new() }
    }

    /// Returns the kind tag for this payload
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Directory { .. } => NodeKind::Directory,
            NodePayload::Binary { .. } => NodeKind::Binary,
            NodePayload::Log { .. } => NodeKind::Log,
            NodePayload::Buffer { .. } => NodeKind::Buffer,
        }
    }
}

/// A single node in the tree
///
/// The parent link is a weak back-reference used for `..` traversal and
/// detaching on delete; ownership always rests with the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node name, unique among its siblings
    pub name: String,
    /// Enclosing directory, `None` only for the root
    pub parent: Option<NodeId>,
    /// Kind-specific payload
    pub payload: NodePayload,
}

impl Node {
    /// Returns the kind tag for this node
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    /// Returns true if this node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self.payload, NodePayload::Directory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_node_id_display() {
        let id = NodeId::new();
        let text = id.to_string();
        assert!(text.starts_with("Node("));
        assert!(text.contains(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_kind_wire_strings() {
        assert_eq!(
            serde_json::to_string(&NodeKind::Directory).unwrap(),
            "\"directory\""
        );
        assert_eq!(
            serde_json::to_string(&NodeKind::Binary).unwrap(),
            "\"binary\""
        );
        assert_eq!(serde_json::to_string(&NodeKind::Log).unwrap(), "\"logfile\"");
        assert_eq!(
            serde_json::to_string(&NodeKind::Buffer).unwrap(),
            "\"buffer\""
        );
    }

    #[test]
    fn test_kind_display_matches_wire() {
        for kind in [
            NodeKind::Directory,
            NodeKind::Binary,
            NodeKind::Log,
            NodeKind::Buffer,
        ] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_payload_kind_tags() {
        assert_eq!(NodePayload::directory().kind(), NodeKind::Directory);
        assert_eq!(NodePayload::buffer().kind(), NodeKind::Buffer);
        assert_eq!(
            NodePayload::Binary {
                content: String::new()
            }
            .kind(),
            NodeKind::Binary
        );
        assert_eq!(
            NodePayload::Log {
                content: String::new()
            }
            .kind(),
            NodeKind::Log
        );
    }

    #[test]
    fn test_directory_node_helpers() {
        let node = Node {
            name: "docs".to_string(),
            parent: None,
            payload: NodePayload::directory(),
        };
        assert!(node.is_directory());
        assert_eq!(node.kind(), NodeKind::Directory);
    }
}
