#![forbid(unsafe_code)]

//! Node-tree data model for the mindmap outliner.
//!
//! A [`NodeTree`] is an id-indexed arena of ideas: each [`Node`] carries a
//! short text label, free-form notes, a palette color, an ordered list of
//! children, and its own collapse flag. The arena keeps a non-owning parent
//! back-reference per node so both top-down and bottom-up traversal are
//! cheap, which the view layer needs for ancestor-collapse and
//! descendant-match queries.
//!
//! All structural operations report failures as typed [`TreeError`] values;
//! a rejected operation never poisons the tree.
//!
//! # Example
//!
//! ```
//! use mindmap_core::NodeTree;
//!
//! let mut tree = NodeTree::new();
//! let child = tree.add_child(tree.root())?;
//! tree.set_text(child, "Child Idea")?;
//! assert_eq!(tree.get(child)?.text(), "Child Idea");
//! # Ok::<(), mindmap_core::TreeError>(())
//! ```

pub mod error;
pub mod id;
pub mod node;
pub mod tree;

pub use error::{Result, TreeError};
pub use id::NodeId;
pub use node::{Node, NodeColor};
pub use tree::NodeTree;
