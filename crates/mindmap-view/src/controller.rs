//! Per-node visibility and highlight derivation.

use mindmap_core::{NodeId, NodeTree, Result};

use crate::search::SearchQuery;

/// One visible node in the flattened render projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    /// Depth below the root (root is 0).
    pub depth: usize,
    /// Whether the node's text matches the active search query.
    pub highlighted: bool,
}

/// Derives render state from a [`NodeTree`] plus the transient search input.
///
/// The controller stores only the search query; collapse flags live on the
/// nodes themselves. Queries are pure functions of the borrowed tree, so
/// there is nothing to invalidate when the host mutates the tree between
/// reads.
///
/// Visibility rule, per node `n`:
/// `visible(n) = (no strict ancestor of n is collapsed) OR
/// (search is active AND some node in n's subtree, n included, matches)`.
/// The root is always visible; a node's own collapse flag hides its
/// children, never itself.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    search: SearchQuery,
}

impl ViewController {
    /// Controller with an empty (inactive) search query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search query. Pure state update; the tree is untouched.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.set(query);
        tracing::debug!(
            message = "view.search",
            query = self.search.raw(),
            active = self.search.is_active()
        );
    }

    /// The query text exactly as entered.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search.raw()
    }

    /// Whether search is currently active.
    #[must_use]
    pub fn search_active(&self) -> bool {
        self.search.is_active()
    }

    /// Whether the node should be rendered at all.
    ///
    /// Fails with `NotFound` when `id` is not in the tree.
    pub fn is_visible(&self, tree: &NodeTree, id: NodeId) -> Result<bool> {
        let mut blocked = false;
        for ancestor in tree.ancestors(id)? {
            if tree.get(ancestor)?.is_collapsed() {
                blocked = true;
                break;
            }
        }
        if !blocked {
            return Ok(true);
        }
        if !self.search.is_active() {
            return Ok(false);
        }
        self.subtree_matches(tree, id)
    }

    /// Whether the node's text should get the highlight treatment.
    ///
    /// True only for nodes whose own text matches the active query; an
    /// ancestor that merely contains a match stays plain.
    pub fn is_highlighted(&self, tree: &NodeTree, id: NodeId) -> Result<bool> {
        Ok(self.search.matches(tree.get(id)?.text()))
    }

    /// The flattened render projection: every visible node in depth-first
    /// order with its depth and highlight flag.
    ///
    /// Row-by-row consistent with [`is_visible`](Self::is_visible) and
    /// [`is_highlighted`](Self::is_highlighted).
    pub fn visible_rows(&self, tree: &NodeTree) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        self.collect_rows(tree, tree.root(), 0, false, &mut rows)?;
        Ok(rows)
    }

    /// Number of visible nodes.
    pub fn visible_count(&self, tree: &NodeTree) -> Result<usize> {
        Ok(self.visible_rows(tree)?.len())
    }

    /// True when any node in the subtree rooted at `id` (itself included)
    /// matches the query.
    fn subtree_matches(&self, tree: &NodeTree, id: NodeId) -> Result<bool> {
        for node_id in tree.subtree(id)? {
            if self.search.matches(tree.get(node_id)?.text()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Emit `id` (the caller has established it is visible), then recurse
    /// into whichever children are visible. `blocked` tracks whether any
    /// strict ancestor of `id` is collapsed.
    fn collect_rows(
        &self,
        tree: &NodeTree,
        id: NodeId,
        depth: usize,
        blocked: bool,
        rows: &mut Vec<Row>,
    ) -> Result<()> {
        let node = tree.get(id)?;
        rows.push(Row {
            id,
            depth,
            highlighted: self.search.matches(node.text()),
        });

        let child_blocked = blocked || node.is_collapsed();
        for &child in node.children() {
            let visible = !child_blocked
                || (self.search.is_active() && self.subtree_matches(tree, child)?);
            if visible {
                self.collect_rows(tree, child, depth + 1, child_blocked, rows)?;
            }
        }
        Ok(())
    }
}
