#![forbid(unsafe_code)]

//! Outline generation: flattens a [`NodeTree`] into a heading document.
//!
//! Each node with a non-empty text label becomes a heading whose level is
//! its depth plus one, capped at 6; its notes follow as a paragraph. Nodes
//! with empty text contribute no heading, but their children are still
//! walked at the deeper level. Collapse flags and search state are
//! deliberately ignored: the outline reflects the whole tree, not the
//! current view.
//!
//! # Example
//!
//! ```
//! use mindmap_core::NodeTree;
//! use mindmap_outline::to_markdown;
//!
//! let mut tree = NodeTree::new();
//! tree.set_text(tree.root(), "Post Title")?;
//! let child = tree.add_child(tree.root())?;
//! tree.set_text(child, "First Section")?;
//!
//! let md = to_markdown(&tree);
//! assert!(md.starts_with("# Post Title"));
//! assert!(md.contains("## First Section"));
//! # Ok::<(), mindmap_core::TreeError>(())
//! ```

use std::fmt::Write;

use mindmap_core::{NodeId, NodeTree};

const MAX_HEADING_LEVEL: usize = 6;

/// Render the whole tree as a markdown-like heading outline.
#[must_use]
pub fn to_markdown(tree: &NodeTree) -> String {
    let mut lines = Vec::new();
    walk(tree, tree.root(), 1, &mut lines);
    lines.join("\n")
}

/// Render the whole tree as HTML headings and paragraphs.
///
/// All user text is HTML-escaped.
#[must_use]
pub fn to_html(tree: &NodeTree) -> String {
    markdown_to_html(&to_markdown(tree))
}

fn walk(tree: &NodeTree, id: NodeId, level: usize, lines: &mut Vec<String>) {
    let Ok(node) = tree.get(id) else {
        return;
    };
    if !node.text().is_empty() {
        let level = level.min(MAX_HEADING_LEVEL);
        lines.push(format!("{} {}", "#".repeat(level), node.text()));
        if !node.notes().is_empty() {
            lines.push(String::new());
            lines.push(node.notes().to_owned());
        }
        lines.push(String::new());
    }
    for &child in node.children() {
        walk(tree, child, level + 1, lines);
    }
}

/// Line-based conversion of the outline markdown: `#` runs become heading
/// tags, blank lines stay blank, everything else becomes a paragraph.
fn markdown_to_html(md: &str) -> String {
    let mut html = String::new();
    for line in md.lines() {
        if let Some((level, rest)) = heading_line(line) {
            let _ = write!(html, "<h{level}>{}</h{level}>", v_htmlescape::escape(rest));
        } else if line.trim().is_empty() {
            html.push('\n');
        } else {
            let _ = write!(html, "<p>{}</p>", v_htmlescape::escape(line));
        }
    }
    html
}

/// Split a `#`-prefixed heading line into its level (1..=6) and text.
fn heading_line(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|&ch| ch == '#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes, rest))
}
