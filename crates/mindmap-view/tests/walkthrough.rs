//! End-to-end editing session: the full add → edit → collapse → expand →
//! search → clear sequence a host UI drives, asserted through the same
//! query surface a renderer would consume.

use mindmap_core::{NodeTree, TreeError};
use mindmap_view::ViewController;

#[test]
fn editing_session_walkthrough() -> Result<(), TreeError> {
    let mut tree = NodeTree::new();
    let mut view = ViewController::new();
    let root = tree.root();

    // Add a child and fill it in.
    let child = tree.add_child(root)?;
    tree.set_text(child, "Child Idea")?;
    tree.set_notes(child, "Some notes for the child.")?;
    assert!(view.is_visible(&tree, child)?);

    // Collapse all: the child disappears, the root stays.
    tree.collapse_all();
    assert!(view.is_visible(&tree, root)?);
    assert!(!view.is_visible(&tree, child)?);

    // Expand all brings it back.
    tree.expand_all();
    assert!(view.is_visible(&tree, child)?);

    // Search highlights the match and keeps both rows visible.
    view.set_search_query("child");
    assert!(view.is_visible(&tree, root)?);
    assert!(view.is_visible(&tree, child)?);
    assert!(view.is_highlighted(&tree, child)?);
    assert!(!view.is_highlighted(&tree, root)?);

    // Clearing the query removes the highlight.
    view.set_search_query("");
    assert!(!view.is_highlighted(&tree, child)?);
    assert!(view.is_visible(&tree, child)?);

    Ok(())
}

#[test]
fn search_reaches_through_collapsed_ancestors() -> Result<(), TreeError> {
    let mut tree = NodeTree::new();
    let mut view = ViewController::new();

    let child = tree.add_child(tree.root())?;
    let grandchild = tree.add_child(child)?;
    tree.set_text(grandchild, "a nested child idea")?;
    tree.set_collapsed(child, true)?;

    assert!(!view.is_visible(&tree, grandchild)?);

    view.set_search_query("child");
    assert!(view.is_visible(&tree, child)?);
    assert!(view.is_visible(&tree, grandchild)?);
    assert!(view.is_highlighted(&tree, grandchild)?);
    assert!(!view.is_highlighted(&tree, child)?);

    view.set_search_query("");
    assert!(!view.is_visible(&tree, grandchild)?);

    Ok(())
}

#[test]
fn rejected_operations_leave_the_session_usable() -> Result<(), TreeError> {
    let mut tree = NodeTree::new();
    let view = ViewController::new();

    let child = tree.add_child(tree.root())?;
    tree.remove_subtree(child)?;

    // Stale id: reported, not fatal.
    assert_eq!(tree.set_text(child, "x"), Err(TreeError::NotFound(child)));
    assert_eq!(
        view.is_visible(&tree, child),
        Err(TreeError::NotFound(child))
    );
    // Removing the root: structurally disallowed, also not fatal.
    assert!(matches!(
        tree.remove_subtree(tree.root()),
        Err(TreeError::InvalidOperation { .. })
    ));

    let replacement = tree.add_child(tree.root())?;
    assert!(view.is_visible(&tree, replacement)?);
    Ok(())
}
