//! Typed failure surface for tree operations.

use thiserror::Error;

use crate::id::NodeId;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Failure of a tree operation.
///
/// Errors are reported to the caller and never retried internally. No
/// variant is fatal: the tree stays fully usable after a rejected
/// operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The operation referenced an id that is not (or no longer) in the tree.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// The operation is structurally disallowed, e.g. removing the root.
    #[error("invalid operation: {message}")]
    InvalidOperation { message: String },
}

impl TreeError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
