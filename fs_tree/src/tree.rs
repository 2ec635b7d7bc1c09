//! Arena-backed tree engine
//!
//! All nodes live in one ID-keyed map owned by [`Tree`]. Directories refer to
//! their children by ID and every node carries its parent's ID, so `..` and
//! delete work without reference cycles.

use crate::node::{
    Node, NodeId, NodeKind, NodePayload, DIR_MAX_ELEMS, MAX_BUF_FILE_SIZE,
};
use crate::path::{is_valid_name, split_path, PathError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during tree mutation and leaf operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Path resolution error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Named child absent
    #[error("No node named {0}")]
    NotFound(String),

    /// Sibling with the same name already present
    #[error("A node named {0} already exists")]
    DuplicateName(String),

    /// Directory at its child capacity
    #[error("Directory cannot hold more than {DIR_MAX_ELEMS} nodes")]
    DirectoryFull,

    /// Buffer file at its item capacity
    #[error("Buffer file cannot hold more than {MAX_BUF_FILE_SIZE} items")]
    BufferFull,

    /// Name is empty, reserved or contains the delimiter
    #[error("Invalid node name: {0:?}")]
    InvalidName(String),

    /// Pop on a buffer with no items
    #[error("Cannot pop from an empty buffer file")]
    EmptyBuffer,

    /// Operation invoked on a mismatched node kind
    #[error("{name} is a {actual}, expected {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        actual: NodeKind,
    },

    /// The root has no parent and cannot be detached
    #[error("The root directory cannot be deleted")]
    CannotDeleteRoot,

    /// The root is not a child of any directory
    #[error("The root directory cannot be moved")]
    CannotMoveRoot,

    /// Moving a directory under itself would orphan the subtree
    #[error("Cannot move a directory into its own subtree")]
    MoveIntoSubtree,
}

/// The node arena plus the root anchor
///
/// The root is a directory named `~`, created at construction and never
/// deletable. All other nodes are created through the factory methods and
/// destroyed only through [`Tree::delete`].
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
}

impl Tree {
    /// Creates a tree holding only the root directory `~`
    pub fn new() -> Self {
        let root = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                name: "~".to_string(),
                parent: None,
                payload: NodePayload::directory(),
            },
        );
        Self { nodes, root }
    }

    /// Returns the root ID
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind an ID, if it is still live
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns the number of live nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if only the root exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes
            .get(&id)
            .ok_or_else(|| TreeError::NotFound(id.to_string()))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| TreeError::NotFound(id.to_string()))
    }

    /// Returns the child IDs of a directory in insertion order
    pub fn children(&self, dir: NodeId) -> Result<&[NodeId], TreeError> {
        let node = self.node(dir)?;
        match &node.payload {
            NodePayload::Directory { children } => Ok(children),
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a directory",
                actual: node.kind(),
            }),
        }
    }

    /// Returns the child names of a directory in insertion order
    pub fn child_names(&self, dir: NodeId) -> Result<Vec<String>, TreeError> {
        Ok(self
            .children(dir)?
            .iter()
            .filter_map(|id| self.get(*id).map(|n| n.name.clone()))
            .collect())
    }

    /// Returns the ancestor IDs of a node, from the root down to its parent
    pub fn ancestor_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            ids.push(parent);
            current = self.get(parent).and_then(|n| n.parent);
        }
        ids.reverse();
        ids
    }

    /// Returns the ancestor names of a node, from the root down to its parent
    ///
    /// The root itself yields an empty sequence; a top-level node yields
    /// `["~"]`.
    pub fn ancestor_names(&self, id: NodeId) -> Vec<String> {
        self.ancestor_ids(id)
            .iter()
            .filter_map(|a| self.get(*a).map(|n| n.name.clone()))
            .collect()
    }

    /// Returns true if `node` lies in the subtree rooted at `ancestor`
    ///
    /// A node is considered part of its own subtree.
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    fn lookup_child(&self, dir: NodeId, name: &str) -> Result<NodeId, PathError> {
        let node = self
            .get(dir)
            .ok_or_else(|| PathError::SegmentNotFound(name.to_string()))?;
        let children = match &node.payload {
            NodePayload::Directory { children } => children,
            _ => return Err(PathError::NotADirectory(node.name.clone())),
        };
        children
            .iter()
            .copied()
            .find(|c| self.get(*c).map_or(false, |n| n.name == name))
            .ok_or_else(|| PathError::SegmentNotFound(name.to_string()))
    }

    /// Resolves a path string against a base directory
    ///
    /// Segments are processed left to right: `.` stays, `..` ascends (failing
    /// at the root), `~` restarts at the root discarding prior traversal, and
    /// any other segment must exactly match a child name. Non-final segments
    /// must resolve to directories; the final node may be of any kind.
    pub fn resolve(&self, base: NodeId, path: &str) -> Result<NodeId, PathError> {
        let segments = split_path(path)?;
        let mut current = base;
        for (i, segment) in segments.iter().enumerate() {
            let final_segment = i + 1 == segments.len();
            current = match *segment {
                "." => current,
                ".." => self
                    .get(current)
                    .and_then(|n| n.parent)
                    .ok_or(PathError::AboveRoot)?,
                "~" => self.root,
                name => {
                    let child = self.lookup_child(current, name)?;
                    if !final_segment
                        && !self.get(child).map_or(false, |n| n.is_directory())
                    {
                        return Err(PathError::NotADirectory(name.to_string()));
                    }
                    child
                }
            };
        }
        Ok(current)
    }

    /// Resolves a path to the full root-to-node ID chain
    ///
    /// Unlike [`Tree::resolve`], popping the chain past the root (`..` once
    /// the chain holds only the root) is an explicit failure rather than a
    /// clamp.
    pub fn resolve_chain(&self, base: NodeId, path: &str) -> Result<Vec<NodeId>, PathError> {
        let segments = split_path(path)?;
        let mut chain = self.ancestor_ids(base);
        chain.push(base);
        for (i, segment) in segments.iter().enumerate() {
            match *segment {
                "." => {}
                ".." => {
                    chain.pop();
                    if chain.is_empty() {
                        return Err(PathError::AboveRoot);
                    }
                }
                "~" => {
                    chain.clear();
                    chain.push(self.root);
                }
                name => {
                    let current = chain.last().copied().ok_or(PathError::AboveRoot)?;
                    let child = self.lookup_child(current, name)?;
                    if i + 1 != segments.len()
                        && !self.get(child).map_or(false, |n| n.is_directory())
                    {
                        return Err(PathError::NotADirectory(name.to_string()));
                    }
                    chain.push(child);
                }
            }
        }
        Ok(chain)
    }

    /// Checks whether a child with the given name may be created
    ///
    /// Capacity is checked before name uniqueness, so a full directory
    /// reports `DirectoryFull` even when the name would also collide.
    pub fn can_create(&self, dir: NodeId, name: &str) -> Result<(), TreeError> {
        let children = self.children(dir)?;
        if children.len() >= DIR_MAX_ELEMS {
            return Err(TreeError::DirectoryFull);
        }
        if children
            .iter()
            .any(|c| self.get(*c).map_or(false, |n| n.name == name))
        {
            return Err(TreeError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn attach(
        &mut self,
        parent: NodeId,
        name: &str,
        payload: NodePayload,
    ) -> Result<NodeId, TreeError> {
        self.can_create(parent, name)?;
        if !is_valid_name(name) {
            return Err(TreeError::InvalidName(name.to_string()));
        }

        let id = NodeId::new();
        let parent_node = self.node_mut(parent)?;
        match &mut parent_node.payload {
            NodePayload::Directory { children } => children.push(id),
            // can_create already verified the parent is a directory
            _ => {
                return Err(TreeError::WrongKind {
                    name: parent_node.name.clone(),
                    expected: "a directory",
                    actual: parent_node.payload.kind(),
                })
            }
        }
        self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                parent: Some(parent),
                payload,
            },
        );
        Ok(id)
    }

    /// Creates an empty directory under `parent`
    pub fn create_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError> {
        self.attach(parent, name, NodePayload::directory())
    }

    /// Creates a binary file with fixed content under `parent`
    pub fn create_binary_file(
        &mut self,
        parent: NodeId,
        name: &str,
        content: &str,
    ) -> Result<NodeId, TreeError> {
        self.attach(
            parent,
            name,
            NodePayload::Binary {
                content: content.to_string(),
            },
        )
    }

    /// Creates a log file with initial content under `parent`
    pub fn create_log_file(
        &mut self,
        parent: NodeId,
        name: &str,
        content: &str,
    ) -> Result<NodeId, TreeError> {
        self.attach(
            parent,
            name,
            NodePayload::Log {
                content: content.to_string(),
            },
        )
    }

    /// Creates an empty buffer file under `parent`
    pub fn create_buffer(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError> {
        self.attach(parent, name, NodePayload::buffer())
    }

    /// Moves the child named `name` from `source` into `dest`
    ///
    /// The destination must be a directory with spare capacity and no child
    /// of the same name, and must not lie inside the moved subtree. A move
    /// within the same directory is allowed and shifts the child to the end
    /// of the insertion order.
    pub fn move_child(
        &mut self,
        source: NodeId,
        name: &str,
        dest: NodeId,
    ) -> Result<NodeId, TreeError> {
        let moved = self
            .children(source)?
            .iter()
            .copied()
            .find(|c| self.get(*c).map_or(false, |n| n.name == name))
            .ok_or_else(|| TreeError::NotFound(name.to_string()))?;

        let dest_children = self.children(dest)?;
        if dest != source {
            if dest_children.len() >= DIR_MAX_ELEMS {
                return Err(TreeError::DirectoryFull);
            }
            if dest_children
                .iter()
                .any(|c| self.get(*c).map_or(false, |n| n.name == name))
            {
                return Err(TreeError::DuplicateName(name.to_string()));
            }
        }
        if self.is_descendant(dest, moved) {
            return Err(TreeError::MoveIntoSubtree);
        }

        if let NodePayload::Directory { children } = &mut self.node_mut(source)?.payload {
            children.retain(|c| *c != moved);
        }
        if let NodePayload::Directory { children } = &mut self.node_mut(dest)?.payload {
            children.push(moved);
        }
        self.node_mut(moved)?.parent = Some(dest);
        Ok(moved)
    }

    /// Deletes a node and its entire subtree
    ///
    /// The node is detached from its parent's child list by identity, then
    /// every node beneath it is freed from the arena, invalidating their IDs.
    pub fn delete(&mut self, id: NodeId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::CannotDeleteRoot);
        }
        let parent = self
            .node(id)?
            .parent
            .ok_or(TreeError::CannotDeleteRoot)?;

        if let NodePayload::Directory { children } = &mut self.node_mut(parent)?.payload {
            children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                if let NodePayload::Directory { children } = node.payload {
                    stack.extend(children);
                }
            }
        }
        Ok(())
    }

    /// Reads the content of a binary or log file
    pub fn read(&self, id: NodeId) -> Result<&str, TreeError> {
        let node = self.node(id)?;
        match &node.payload {
            NodePayload::Binary { content } | NodePayload::Log { content } => Ok(content),
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a binary or log file",
                actual: node.kind(),
            }),
        }
    }

    /// Appends text to a log file
    ///
    /// No separator is inserted and there is no size cap.
    pub fn append(&mut self, id: NodeId, text: &str) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        match &mut node.payload {
            NodePayload::Log { content } => {
                content.push_str(text);
                Ok(())
            }
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a log file",
                actual: node.payload.kind(),
            }),
        }
    }

    /// Pushes an item onto a buffer file
    pub fn push(&mut self, id: NodeId, item: &str) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        match &mut node.payload {
            NodePayload::Buffer { items } => {
                if items.len() >= MAX_BUF_FILE_SIZE {
                    return Err(TreeError::BufferFull);
                }
                items.push(item.to_string());
                Ok(())
            }
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a buffer file",
                actual: node.payload.kind(),
            }),
        }
    }

    /// Pops the most recently pushed item from a buffer file
    pub fn pop(&mut self, id: NodeId) -> Result<String, TreeError> {
        let node = self.node_mut(id)?;
        match &mut node.payload {
            NodePayload::Buffer { items } => items.pop().ok_or(TreeError::EmptyBuffer),
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a buffer file",
                actual: node.payload.kind(),
            }),
        }
    }

    /// Returns the item count of a buffer file
    pub fn buffer_len(&self, id: NodeId) -> Result<usize, TreeError> {
        let node = self.node(id)?;
        match &node.payload {
            NodePayload::Buffer { items } => Ok(items.len()),
            _ => Err(TreeError::WrongKind {
                name: node.name.clone(),
                expected: "a buffer file",
                actual: node.kind(),
            }),
        }
    }

    /// Renders the subtree under `base` as an indented listing
    ///
    /// Depth-first, pre-order, three spaces per level. Diagnostic only; the
    /// tree is not touched.
    pub fn render_tree(&self, base: NodeId) -> Result<String, TreeError> {
        let mut out = String::new();
        out.push_str(&self.node(base)?.name);
        out.push('\n');
        self.render_children(base, 1, &mut out)?;
        Ok(out)
    }

    fn render_children(
        &self,
        dir: NodeId,
        level: usize,
        out: &mut String,
    ) -> Result<(), TreeError> {
        for child in self.children(dir)? {
            let node = self.node(*child)?;
            out.push_str(&"   ".repeat(level));
            out.push_str(&node.name);
            out.push('\n');
            if node.is_directory() {
                self.render_children(*child, level + 1, out)?;
            }
        }
        Ok(())
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
