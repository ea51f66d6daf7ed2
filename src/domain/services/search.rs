//! Search submission capability
//!
//! The header owns the text state; what a submitted query does is up to the
//! handler placed in context.

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Path of the page the search was issued from
    pub origin_path: String,
}

impl SearchQuery {
    /// Returns `None` for blank input
    pub fn new(raw: &str, origin_path: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            origin_path: origin_path.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No backend is wired in
    Ignored,
    Accepted,
    /// The handler wants the router to move somewhere
    Navigate(String),
}

impl SearchOutcome {
    /// Status line shown under the search box, `None` when nothing needs saying
    pub fn feedback(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Ignored => Some("Search is not available yet"),
            SearchOutcome::Accepted => Some("Searching..."),
            SearchOutcome::Navigate(_) => None,
        }
    }
}

pub trait SearchHandler {
    /// Short name for logs
    fn name(&self) -> &'static str;

    fn submit(&self, query: &SearchQuery) -> SearchOutcome;
}

/// Placeholder until a real search backend exists
#[derive(Debug, Clone, Copy, Default)]
pub struct InertSearch;

impl SearchHandler for InertSearch {
    fn name(&self) -> &'static str {
        "inert"
    }

    fn submit(&self, _query: &SearchQuery) -> SearchOutcome {
        SearchOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(SearchQuery::new("", "/dashboard").is_none());
        assert!(SearchQuery::new("   \t", "/dashboard").is_none());
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = SearchQuery::new("  q3 revenue ", "/reports").unwrap();
        assert_eq!(query.text, "q3 revenue");
        assert_eq!(query.origin_path, "/reports");
    }

    #[test]
    fn test_inert_search_ignores_everything() {
        let query = SearchQuery::new("churn", "/customers").unwrap();
        assert_eq!(InertSearch.submit(&query), SearchOutcome::Ignored);
    }

    #[test]
    fn test_outcome_feedback() {
        assert!(SearchOutcome::Ignored.feedback().is_some());
        assert_eq!(SearchOutcome::Accepted.feedback(), Some("Searching..."));
        assert_eq!(SearchOutcome::Navigate("/reports".to_string()).feedback(), None);
    }
}
