//! Search query state and match policy.
//!
//! Match policy: case-insensitive substring match against a node's text
//! label only. The query is trimmed of surrounding whitespace before
//! matching; a whitespace-only query is treated as no query at all. The
//! same predicate backs both the visibility override and highlighting, so
//! the two projections can never disagree about what a match is.

/// The current search input, folded for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// Empty, inactive query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text.
    pub fn set(&mut self, query: impl Into<String>) {
        self.raw = query.into();
        self.folded = self.raw.trim().to_lowercase();
    }

    /// Clear the query, deactivating search.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.folded.clear();
    }

    /// The query text exactly as entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether search is active: the trimmed query is non-empty.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.folded.is_empty()
    }

    /// Whether `text` matches the active query.
    ///
    /// Always false when search is inactive.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.is_active() && text.to_lowercase().contains(&self.folded)
    }
}
