//! Site search: tokenizing, indexing, scoring, snippets and highlighting.
//!
//! [`SearchEngine`] ties the pieces together over an immutable [`DocumentIndex`].

pub mod engine;
pub mod index;
pub mod scoring;
pub mod snippet;
pub mod tokenizer;

pub use engine::{
    SearchEngine, DEFAULT_MAX_QUERY_CHARS, DEFAULT_SUGGESTION_LIMIT, POPULAR_SEARCHES,
};
pub use index::{DocumentIndex, IndexEntry};
pub use snippet::{generate_snippet, highlight_matches, HighlightMarkers, MAX_SNIPPET_LENGTH};
pub use tokenizer::{is_stop_word, tokenize, STOP_WORDS};
