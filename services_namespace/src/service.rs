//! Namespace service implementation

use crate::operations::{NamespaceOperations, NodeInfo, OperationError};
use fs_tree::{NodeId, NodePayload, Tree, TreeError};

/// The namespace service
///
/// Owns the tree and the current-working-directory pointer. The cwd is a
/// plain ID, never ownership; the invariant that it denotes a live directory
/// reachable from the root is restored on delete by resetting it to the root
/// whenever the deleted subtree contained it.
#[derive(Debug, Clone)]
pub struct NamespaceService {
    tree: Tree,
    cwd: NodeId,
}

impl NamespaceService {
    /// Creates a service over a fresh tree, with the cwd at the root
    pub fn new() -> Self {
        let tree = Tree::new();
        let cwd = tree.root();
        Self { tree, cwd }
    }

    /// Returns the underlying tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the cwd ID
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    fn resolve(&self, path: &str) -> Result<NodeId, OperationError> {
        Ok(self.tree.resolve(self.cwd, path)?)
    }

    fn resolve_directory(&self, path: &str) -> Result<NodeId, OperationError> {
        let id = self.resolve(path)?;
        let node = self
            .tree
            .get(id)
            .ok_or_else(|| OperationError::Tree(TreeError::NotFound(path.to_string())))?;
        if !node.is_directory() {
            return Err(OperationError::NotADirectory(node.name.clone()));
        }
        Ok(id)
    }

    fn build_info(&self, id: NodeId) -> Result<NodeInfo, OperationError> {
        let node = self
            .tree
            .get(id)
            .ok_or_else(|| OperationError::Tree(TreeError::NotFound(id.to_string())))?;
        let childs = match &node.payload {
            NodePayload::Directory { .. } => Some(self.tree.child_names(id)?),
            _ => None,
        };
        let length = match &node.payload {
            NodePayload::Buffer { items } => Some(items.len()),
            _ => None,
        };
        Ok(NodeInfo {
            name: node.name.clone(),
            kind: node.kind(),
            path: self.tree.ancestor_names(id),
            childs,
            length,
        })
    }
}

impl Default for NamespaceService {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceOperations for NamespaceService {
    fn node_info(&self, path: &str) -> Result<NodeInfo, OperationError> {
        let id = self.resolve(path)?;
        self.build_info(id)
    }

    fn change_working_directory(&mut self, path: &str) -> Result<(), OperationError> {
        let id = self.resolve_directory(path)?;
        self.cwd = id;
        Ok(())
    }

    fn list_cwd(&self) -> Result<Vec<String>, OperationError> {
        Ok(self.tree.child_names(self.cwd)?)
    }

    fn render_tree(&self) -> Result<String, OperationError> {
        Ok(self.tree.render_tree(self.cwd)?)
    }

    fn cwd_path(&self) -> String {
        let mut names = self.tree.ancestor_names(self.cwd);
        if let Some(node) = self.tree.get(self.cwd) {
            names.push(node.name.clone());
        }
        names.join("/")
    }

    fn create_directory(&mut self, path: &str, name: &str) -> Result<NodeInfo, OperationError> {
        let parent = self.resolve_directory(path)?;
        let id = self.tree.create_directory(parent, name)?;
        self.build_info(id)
    }

    fn create_binary_file(
        &mut self,
        path: &str,
        name: &str,
        content: &str,
    ) -> Result<NodeInfo, OperationError> {
        let parent = self.resolve_directory(path)?;
        let id = self.tree.create_binary_file(parent, name, content)?;
        self.build_info(id)
    }

    fn create_log_file(
        &mut self,
        path: &str,
        name: &str,
        content: &str,
    ) -> Result<NodeInfo, OperationError> {
        let parent = self.resolve_directory(path)?;
        let id = self.tree.create_log_file(parent, name, content)?;
        self.build_info(id)
    }

    fn create_buffer(&mut self, path: &str, name: &str) -> Result<NodeInfo, OperationError> {
        let parent = self.resolve_directory(path)?;
        let id = self.tree.create_buffer(parent, name)?;
        self.build_info(id)
    }

    fn move_node(
        &mut self,
        src_path: &str,
        dest_path: &str,
    ) -> Result<NodeInfo, OperationError> {
        let src = self.resolve(src_path)?;
        let (source_dir, name) = {
            let node = self
                .tree
                .get(src)
                .ok_or_else(|| OperationError::Tree(TreeError::NotFound(src_path.to_string())))?;
            let parent = node
                .parent
                .ok_or(OperationError::Tree(TreeError::CannotMoveRoot))?;
            (parent, node.name.clone())
        };
        let dest = self.resolve_directory(dest_path)?;
        self.tree.move_child(source_dir, &name, dest)?;
        self.build_info(dest)
    }

    fn delete(&mut self, path: &str) -> Result<NodeInfo, OperationError> {
        let id = self.resolve(path)?;
        let info = self.build_info(id)?;
        let cwd_was_inside = self.tree.is_descendant(self.cwd, id);
        self.tree.delete(id)?;
        if cwd_was_inside {
            self.cwd = self.tree.root();
        }
        Ok(info)
    }

    fn read(&self, path: &str) -> Result<String, OperationError> {
        let id = self.resolve(path)?;
        Ok(self.tree.read(id)?.to_string())
    }

    fn append_log(&mut self, path: &str, text: &str) -> Result<String, OperationError> {
        let id = self.resolve(path)?;
        self.tree.append(id, text)?;
        Ok(self.tree.read(id)?.to_string())
    }

    fn push_buffer(&mut self, path: &str, item: &str) -> Result<NodeInfo, OperationError> {
        let id = self.resolve(path)?;
        self.tree.push(id, item)?;
        self.build_info(id)
    }

    fn pop_buffer(&mut self, path: &str) -> Result<String, OperationError> {
        let id = self.resolve(path)?;
        Ok(self.tree.pop(id)?)
    }
}
