#![forbid(unsafe_code)]

//! Visibility and highlight projection for the mindmap outliner.
//!
//! [`ViewController`] owns the transient search state and derives, per node,
//! whether it should be rendered at all and whether its text deserves the
//! highlight treatment. It holds no tree data: every query borrows the
//! [`NodeTree`](mindmap_core::NodeTree), so the projection always reflects
//! the latest committed state.
//!
//! # Example
//!
//! ```
//! use mindmap_core::NodeTree;
//! use mindmap_view::ViewController;
//!
//! let mut tree = NodeTree::new();
//! let child = tree.add_child(tree.root())?;
//! tree.set_text(child, "Child Idea")?;
//!
//! let mut view = ViewController::new();
//! tree.collapse_all();
//! assert!(!view.is_visible(&tree, child)?);
//!
//! // Search reveals matches nested under collapsed ancestors.
//! view.set_search_query("child");
//! assert!(view.is_visible(&tree, child)?);
//! assert!(view.is_highlighted(&tree, child)?);
//! # Ok::<(), mindmap_core::TreeError>(())
//! ```

pub mod controller;
pub mod search;

pub use controller::{Row, ViewController};
pub use search::SearchQuery;
