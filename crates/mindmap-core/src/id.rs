//! Opaque node identifiers.

use std::fmt;

/// Identifier of a node within one [`NodeTree`](crate::NodeTree).
///
/// Ids are allocated from a per-tree monotonic counter and are never reused,
/// even after the node is removed: a stale id can only fail lookup, never
/// alias a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw counter value, for logging and diagnostics only.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
