//! Id-indexed node arena.
//!
//! The tree owns every [`Node`] in a hash map keyed by [`NodeId`]; parents
//! hold ordered child-id vectors and each node keeps a non-owning parent
//! back-reference. This gives the view layer cheap bottom-up traversal
//! (ancestor collapse checks) and top-down traversal (descendant match
//! checks) without ownership cycles.
//!
//! There is always exactly one root. The root cannot be removed, reordered,
//! or reparented; everything else can.

use ahash::AHashMap;

use crate::error::{Result, TreeError};
use crate::id::NodeId;
use crate::node::{Node, NodeColor};

/// Hierarchical storage and mutation of ideas.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: AHashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl NodeTree {
    /// Create a tree holding a single empty root node.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId::new(0);
        let mut nodes = AHashMap::new();
        nodes.insert(root, Node::new(None));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// Id of the root node.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the given id is currently in the tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Read access to a node.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(TreeError::NotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(&id).ok_or(TreeError::NotFound(id))
    }

    fn alloc(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(Some(parent)));
        id
    }

    // -----------------------------------------------------------------------
    // Structural mutation
    // -----------------------------------------------------------------------

    /// Append a new empty child to `parent`, returning its id.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId> {
        if !self.contains(parent) {
            return Err(TreeError::NotFound(parent));
        }
        let id = self.alloc(parent);
        self.get_mut(parent)?.children.push(id);
        tracing::debug!(message = "tree.add_child", parent = %parent, child = %id);
        Ok(id)
    }

    /// Insert a new empty node immediately after `id` under the same parent.
    ///
    /// Fails with `InvalidOperation` for the root, which has no siblings.
    pub fn add_sibling(&mut self, id: NodeId) -> Result<NodeId> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("the root cannot have siblings"))?;
        let index = self.child_index(parent, id)?;
        let new_id = self.alloc(parent);
        self.get_mut(parent)?.children.insert(index + 1, new_id);
        tracing::debug!(message = "tree.add_sibling", after = %id, child = %new_id);
        Ok(new_id)
    }

    /// Detach `id` and its entire subtree from the tree.
    ///
    /// Every removed id becomes permanently unknown to the tree. Fails with
    /// `InvalidOperation` for the root.
    pub fn remove_subtree(&mut self, id: NodeId) -> Result<()> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("cannot remove the root"))?;
        self.get_mut(parent)?.children.retain(|&child| child != id);

        let mut removed = 0usize;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                removed += 1;
                stack.extend(node.children);
            }
        }
        tracing::debug!(message = "tree.remove_subtree", id = %id, removed);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Content mutation
    // -----------------------------------------------------------------------

    /// Replace the node's text label. No content validation.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.text = text.into();
        Ok(())
    }

    /// Replace the node's notes. No content validation.
    pub fn set_notes(&mut self, id: NodeId, notes: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.notes = notes.into();
        Ok(())
    }

    /// Assign a palette color.
    pub fn set_color(&mut self, id: NodeId, color: NodeColor) -> Result<()> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Collapse state
    // -----------------------------------------------------------------------

    /// Set the node's own collapse flag.
    ///
    /// Descendants keep their own flags; only their effective visibility is
    /// affected (see the view layer).
    pub fn set_collapsed(&mut self, id: NodeId, collapsed: bool) -> Result<()> {
        self.get_mut(id)?.collapsed = collapsed;
        tracing::debug!(message = "tree.set_collapsed", id = %id, collapsed);
        Ok(())
    }

    /// Flip the node's collapse flag, returning the new state.
    pub fn toggle_collapsed(&mut self, id: NodeId) -> Result<bool> {
        let node = self.get_mut(id)?;
        node.collapsed = !node.collapsed;
        Ok(node.collapsed)
    }

    /// Set `collapsed` on every node, root included.
    pub fn collapse_all(&mut self) {
        for node in self.nodes.values_mut() {
            node.collapsed = true;
        }
        tracing::debug!(message = "tree.collapse_all", nodes = self.nodes.len());
    }

    /// Clear `collapsed` on every node, root included.
    pub fn expand_all(&mut self) {
        for node in self.nodes.values_mut() {
            node.collapsed = false;
        }
        tracing::debug!(message = "tree.expand_all", nodes = self.nodes.len());
    }

    // -----------------------------------------------------------------------
    // Reordering
    // -----------------------------------------------------------------------

    /// Swap `id` with its previous sibling.
    ///
    /// Returns `Ok(false)` when the node is already first. Fails with
    /// `InvalidOperation` for the root.
    pub fn move_up(&mut self, id: NodeId) -> Result<bool> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("the root cannot be reordered"))?;
        let index = self.child_index(parent, id)?;
        if index == 0 {
            return Ok(false);
        }
        self.get_mut(parent)?.children.swap(index - 1, index);
        Ok(true)
    }

    /// Swap `id` with its next sibling.
    ///
    /// Returns `Ok(false)` when the node is already last. Fails with
    /// `InvalidOperation` for the root.
    pub fn move_down(&mut self, id: NodeId) -> Result<bool> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("the root cannot be reordered"))?;
        let index = self.child_index(parent, id)?;
        let last = self.get(parent)?.children.len() - 1;
        if index == last {
            return Ok(false);
        }
        self.get_mut(parent)?.children.swap(index, index + 1);
        Ok(true)
    }

    /// Reparent `id` under its previous sibling, appended as its last child.
    ///
    /// Returns `Ok(false)` when there is no previous sibling. Fails with
    /// `InvalidOperation` for the root.
    pub fn indent(&mut self, id: NodeId) -> Result<bool> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("the root cannot be indented"))?;
        let index = self.child_index(parent, id)?;
        if index == 0 {
            return Ok(false);
        }
        let new_parent = self.get(parent)?.children[index - 1];
        self.get_mut(parent)?.children.remove(index);
        self.get_mut(new_parent)?.children.push(id);
        self.get_mut(id)?.parent = Some(new_parent);
        tracing::debug!(message = "tree.indent", id = %id, new_parent = %new_parent);
        Ok(true)
    }

    /// Reparent `id` as the next sibling of its current parent.
    ///
    /// Returns `Ok(false)` when the parent is the root (nothing shallower to
    /// move to). Fails with `InvalidOperation` for the root.
    pub fn outdent(&mut self, id: NodeId) -> Result<bool> {
        let parent = self
            .get(id)?
            .parent
            .ok_or_else(|| TreeError::invalid("the root cannot be outdented"))?;
        let Some(grandparent) = self.get(parent)?.parent else {
            return Ok(false);
        };
        let index = self.child_index(parent, id)?;
        let parent_index = self.child_index(grandparent, parent)?;
        self.get_mut(parent)?.children.remove(index);
        self.get_mut(grandparent)?
            .children
            .insert(parent_index + 1, id);
        self.get_mut(id)?.parent = Some(grandparent);
        tracing::debug!(message = "tree.outdent", id = %id, new_parent = %grandparent);
        Ok(true)
    }

    fn child_index(&self, parent: NodeId, id: NodeId) -> Result<usize> {
        self.get(parent)?
            .children
            .iter()
            .position(|&child| child == id)
            .ok_or(TreeError::NotFound(id))
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Child ids of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(id)?.children)
    }

    /// Parent of `id`, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    /// Strict ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> Result<Ancestors<'_>> {
        Ok(Ancestors {
            tree: self,
            next: self.get(id)?.parent,
        })
    }

    /// Depth-first walk of the subtree rooted at `id`, including `id` itself.
    ///
    /// Children are visited in insertion order.
    pub fn subtree(&self, id: NodeId) -> Result<Subtree<'_>> {
        if !self.contains(id) {
            return Err(TreeError::NotFound(id));
        }
        Ok(Subtree {
            tree: self,
            stack: vec![id],
        })
    }

    /// Depth-first walk of the whole tree, starting at the root.
    #[must_use]
    pub fn iter(&self) -> Subtree<'_> {
        Subtree {
            tree: self,
            stack: vec![self.root],
        }
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over strict ancestors, produced by [`NodeTree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a NodeTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.nodes.get(&id).and_then(|node| node.parent);
        Some(id)
    }
}

/// Depth-first subtree iterator, produced by [`NodeTree::subtree`] and
/// [`NodeTree::iter`].
#[derive(Debug)]
pub struct Subtree<'a> {
    tree: &'a NodeTree,
    stack: Vec<NodeId>,
}

impl Iterator for Subtree<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.nodes.get(&id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
