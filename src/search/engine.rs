//! The search engine: ranked search, suggestions, and popular searches.
//!
//! The engine owns an immutable [`DocumentIndex`] and never mutates it after
//! construction, so one instance can be shared across threads behind an `Arc`.
//! Every operation is a pure function of the index and its arguments and
//! always answers: bad input degrades to an empty result, never an error.

use super::index::{DocumentIndex, IndexEntry};
use super::scoring::{is_partial_match, score_document};
use super::snippet::{generate_snippet, highlight_matches, HighlightMarkers, MAX_SNIPPET_LENGTH};
use super::tokenizer::tokenize;
use crate::catalog::{BuiltinCatalog, DocumentSource};
use crate::error::CatalogResult;
use crate::matching::FuzzyMatcher;
use crate::models::{IndexedDocument, SearchOptions, SearchResult};
use std::collections::HashSet;

/// Default cap on query length, in characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 500;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Shortest partial query that produces suggestions.
pub const MIN_SUGGESTION_QUERY_LENGTH: usize = 2;

/// Suggested words must be longer than this.
const MIN_SUGGESTION_WORD_LENGTH: usize = 2;

/// Common queries shown in the suggestions panel.
pub const POPULAR_SEARCHES: &[&str] = &[
    "savings account",
    "credit card",
    "personal loan",
    "mobile banking",
    "online banking",
    "home loan",
    "business account",
    "investment",
    "fixed deposit",
    "customer support",
];

/// In-memory site search engine.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: DocumentIndex,
    markers: HighlightMarkers,
    max_query_chars: usize,
}

impl SearchEngine {
    /// Build an engine from a document source.
    ///
    /// # Errors
    /// Fails if the source cannot be loaded or its documents are invalid.
    pub fn new(source: &dyn DocumentSource) -> CatalogResult<Self> {
        Ok(Self::from_index(DocumentIndex::from_source(source)?))
    }

    /// Build an engine over the built-in site catalog.
    pub fn with_builtin_catalog() -> CatalogResult<Self> {
        Self::new(&BuiltinCatalog::new())
    }

    /// Build an engine directly from documents.
    pub fn from_documents(documents: Vec<IndexedDocument>) -> CatalogResult<Self> {
        Ok(Self::from_index(DocumentIndex::build(documents)?))
    }

    /// Wrap an already built index.
    pub fn from_index(index: DocumentIndex) -> Self {
        Self {
            index,
            markers: HighlightMarkers::default(),
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }

    /// Use different highlight markup.
    pub fn with_highlight_markers(mut self, markers: HighlightMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Bound the number of query characters considered per search.
    ///
    /// Longer queries are truncated, which caps the fuzzy matching cost.
    pub fn with_max_query_chars(mut self, max_query_chars: usize) -> Self {
        self.max_query_chars = max_query_chars.max(1);
        self
    }

    /// The underlying index.
    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Get the number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Tokenize a query the way `search` does, including length filtering.
    pub fn query_tokens(&self, query: &str, options: &SearchOptions) -> Vec<String> {
        let bounded = match query.char_indices().nth(self.max_query_chars) {
            Some((cut, _)) => {
                tracing::warn!(
                    max_chars = self.max_query_chars,
                    "Query truncated before tokenizing"
                );
                &query[..cut]
            }
            None => query,
        };

        tokenize(bounded)
            .into_iter()
            .filter(|token| token.chars().count() >= options.min_keyword_length)
            .collect()
    }

    /// Search the index and return ranked results.
    ///
    /// Results are sorted by descending relevance; equal scores keep index
    /// order. At most `options.max_results` are returned.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let options = options.normalized();
        let query_tokens = self.query_tokens(query, &options);
        if query_tokens.is_empty() {
            tracing::debug!(query = %query, "No usable query tokens");
            return Vec::new();
        }

        let mut matcher = FuzzyMatcher::new();
        let mut results: Vec<SearchResult> = self
            .index
            .entries()
            .iter()
            .filter_map(|entry| {
                let score = score_document(entry, &query_tokens, &options, &mut matcher);
                (score > 0.0).then(|| self.build_result(entry, &query_tokens, score))
            })
            .collect();

        results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        results.truncate(options.max_results);

        tracing::debug!(
            query = %query,
            tokens = query_tokens.len(),
            results = results.len(),
            "Search completed"
        );

        results
    }

    fn build_result(
        &self,
        entry: &IndexEntry,
        query_tokens: &[String],
        relevance_score: f64,
    ) -> SearchResult {
        let doc = &entry.document;
        let snippet = generate_snippet(&doc.body, query_tokens, MAX_SNIPPET_LENGTH);
        let matched_keywords = query_tokens
            .iter()
            .filter(|token| {
                entry
                    .keyword_tokens
                    .iter()
                    .any(|keyword| is_partial_match(token, keyword))
            })
            .cloned()
            .collect();

        SearchResult {
            id: doc.id.clone(),
            title: doc.title.clone(),
            url: doc.url.clone(),
            kind: doc.kind,
            category: doc.category.clone(),
            highlighted_title: highlight_matches(&doc.title, query_tokens, &self.markers),
            highlighted_snippet: highlight_matches(&snippet, query_tokens, &self.markers),
            snippet,
            relevance_score,
            matched_keywords,
        }
    }

    /// Keywords and title words containing the partial query.
    ///
    /// Scans the whole index in order and returns up to `limit` distinct
    /// words longer than two characters, in order of first encounter.
    /// Keywords keep their catalog casing; title words are lower-cased.
    pub fn get_suggestions(&self, partial_query: &str, limit: usize) -> Vec<String> {
        let trimmed = partial_query.trim();
        if trimmed.chars().count() < MIN_SUGGESTION_QUERY_LENGTH || limit == 0 {
            return Vec::new();
        }

        let needle = trimmed.to_lowercase();
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions: Vec<String> = Vec::new();

        let mut offer = |word: String| {
            if word.chars().count() > MIN_SUGGESTION_WORD_LENGTH && seen.insert(word.clone()) {
                suggestions.push(word);
            }
        };

        for entry in self.index.entries() {
            let doc = &entry.document;

            for keyword in &doc.keywords {
                if keyword.to_lowercase().contains(&needle) {
                    offer(keyword.clone());
                }
            }

            for word in doc.title.to_lowercase().split(' ') {
                if word.contains(&needle) {
                    offer(word.to_string());
                }
            }
        }

        suggestions.truncate(limit);
        suggestions
    }

    /// Fixed list of common queries.
    pub fn get_popular_searches(&self) -> &'static [&'static str] {
        POPULAR_SEARCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentKind;

    fn small_engine() -> SearchEngine {
        SearchEngine::from_documents(vec![
            IndexedDocument::new(
                "loans",
                "Personal Loans",
                "Personal loans with quick approval. Flexible repayment.",
                "/loans",
                DocumentKind::Product,
                "Loans",
                &["personal", "loans", "quick"],
            ),
            IndexedDocument::new(
                "support",
                "Customer Support",
                "Phone support and live chat.",
                "/support",
                DocumentKind::Page,
                "Support",
                &["support", "phone", "chat"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_queries() {
        let engine = small_engine();
        let options = SearchOptions::default();
        assert!(engine.search("", &options).is_empty());
        assert!(engine.search("   ", &options).is_empty());
        assert!(engine.search("the and of", &options).is_empty());
        assert!(engine.search("x y z", &options).is_empty());
    }

    #[test]
    fn test_search_ranks_best_match_first() {
        let engine = small_engine();
        let results = engine.search("loans", &SearchOptions::default());
        assert_eq!(results[0].id, "loans");
        assert!(results.iter().all(|r| r.relevance_score > 0.0));
    }

    #[test]
    fn test_result_fields() {
        let engine = small_engine().with_highlight_markers(HighlightMarkers::new("<b>", "</b>"));
        let results = engine.search("quick loans", &SearchOptions::default());
        let top = &results[0];

        assert_eq!(top.title, "Personal Loans");
        assert_eq!(top.url, "/loans");
        assert_eq!(top.kind, DocumentKind::Product);
        assert_eq!(top.category, "Loans");
        assert_eq!(top.snippet, "Personal loans with quick approval");
        assert_eq!(top.highlighted_title, "Personal <b>Loans</b>");
        assert_eq!(
            top.highlighted_snippet,
            "Personal <b>loans</b> with <b>quick</b> approval"
        );
        assert_eq!(top.matched_keywords, vec!["quick", "loans"]);
    }

    #[test]
    fn test_max_results_zero() {
        let engine = small_engine();
        let options = SearchOptions::default().with_max_results(0);
        assert!(engine.search("support", &options).is_empty());
    }

    #[test]
    fn test_min_keyword_length() {
        let engine = small_engine();
        let options = SearchOptions::default().with_min_keyword_length(6);
        // "loans" has five characters and is discarded
        assert!(engine.search("loans", &options).is_empty());
        assert_eq!(engine.query_tokens("loans support", &options), vec!["support"]);
    }

    #[test]
    fn test_query_truncated_to_bound() {
        let engine = small_engine().with_max_query_chars(5);
        let tokens = engine.query_tokens("loans support", &SearchOptions::default());
        assert_eq!(tokens, vec!["loans"]);
    }

    #[test]
    fn test_suggestions() {
        let engine = small_engine();
        assert_eq!(engine.get_suggestions("sup", 5), vec!["support"]);
        assert_eq!(engine.get_suggestions("PHO", 5), vec!["phone"]);
        assert!(engine.get_suggestions("s", 5).is_empty());
        assert!(engine.get_suggestions("  ", 5).is_empty());
        assert!(engine.get_suggestions("loans", 0).is_empty());
    }

    #[test]
    fn test_suggestions_dedupe_keyword_and_title_word() {
        let engine = small_engine();
        // "personal" is both a keyword and a title word
        assert_eq!(engine.get_suggestions("person", 5), vec!["personal"]);
    }

    #[test]
    fn test_popular_searches() {
        let engine = small_engine();
        let popular = engine.get_popular_searches();
        assert_eq!(popular.len(), 10);
        assert_eq!(popular[0], "savings account");
        assert_eq!(popular[9], "customer support");
    }
}
