//! Search result model.

use super::document::DocumentKind;
use serde::{Deserialize, Serialize};

/// One ranked document returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Document ID
    pub id: String,

    /// Plain title
    pub title: String,

    /// Target location
    pub url: String,

    /// Content kind
    pub kind: DocumentKind,

    /// Grouping label
    pub category: String,

    /// Plain body excerpt
    pub snippet: String,

    /// Title with match markup inserted
    pub highlighted_title: String,

    /// Snippet with match markup inserted
    pub highlighted_snippet: String,

    /// Unnormalized relevance, comparable only within one query's results
    pub relevance_score: f64,

    /// Query tokens that matched one of the document's keywords
    pub matched_keywords: Vec<String>,
}
