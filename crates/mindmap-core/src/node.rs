//! A single idea in the mind map.

use crate::id::NodeId;

/// Palette color assignable to a node.
///
/// The palette is fixed; hosts map variants to whatever visual treatment
/// they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeColor {
    #[default]
    Blue,
    Green,
    Amber,
    Pink,
    Violet,
}

impl NodeColor {
    /// Every palette entry, in display order.
    pub const ALL: [Self; 5] = [Self::Blue, Self::Green, Self::Amber, Self::Pink, Self::Violet];

    /// Stable lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Pink => "pink",
            Self::Violet => "violet",
        }
    }
}

/// A node in the tree: one idea with its label, notes, and children.
///
/// Nodes are created and mutated exclusively through
/// [`NodeTree`](crate::NodeTree) operations; this type only exposes read
/// access.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) text: String,
    pub(crate) notes: String,
    pub(crate) color: NodeColor,
    pub(crate) collapsed: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>) -> Self {
        Self {
            text: String::new(),
            notes: String::new(),
            color: NodeColor::default(),
            collapsed: false,
            parent,
            children: Vec::new(),
        }
    }

    /// The idea label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Free-form detail attached to the idea.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Assigned palette color.
    #[must_use]
    pub fn color(&self) -> NodeColor {
        self.color
    }

    /// Whether this node's own collapse flag is set.
    ///
    /// A collapsed node hides its children from the visible projection, not
    /// itself.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Parent id, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this node has any children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty_and_expanded() {
        let node = Node::new(None);
        assert_eq!(node.text(), "");
        assert_eq!(node.notes(), "");
        assert_eq!(node.color(), NodeColor::Blue);
        assert!(!node.is_collapsed());
        assert!(node.parent().is_none());
        assert!(!node.has_children());
    }

    #[test]
    fn color_names_are_lowercase() {
        for color in NodeColor::ALL {
            assert_eq!(color.name(), color.name().to_lowercase());
        }
    }

    #[test]
    fn default_color_is_blue() {
        assert_eq!(NodeColor::default(), NodeColor::Blue);
    }
}
