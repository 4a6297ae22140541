//! Suggestion tools for the search box dropdown.

use super::recent::RecentSearches;
use crate::observability::MetricsTracker;
use crate::search::SearchEngine;
use std::sync::Arc;

/// Type-ahead suggestions, popular searches, and recent searches.
#[derive(Clone)]
pub struct SuggestionTools {
    engine: Arc<SearchEngine>,
    recent: Arc<RecentSearches>,
    default_limit: usize,
    metrics: MetricsTracker,
}

impl SuggestionTools {
    /// Create new suggestion tools.
    ///
    /// `recent` should be the same history the search tools record into.
    pub fn new(
        engine: Arc<SearchEngine>,
        recent: Arc<RecentSearches>,
        default_limit: usize,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            engine,
            recent,
            default_limit,
            metrics,
        }
    }

    /// Words from the catalog containing `partial_query`.
    pub fn suggestions(&self, partial_query: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(self.default_limit);
        let suggestions = self.engine.get_suggestions(partial_query, limit);
        self.metrics.track_suggestion_request(suggestions.len());
        suggestions
    }

    /// Fixed list of common queries.
    pub fn popular(&self) -> Vec<String> {
        self.engine
            .get_popular_searches()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Recently submitted queries, most recent first.
    pub fn recent(&self) -> Vec<String> {
        let mut queries = self.recent.list();
        queries.reverse();
        queries
    }
}
