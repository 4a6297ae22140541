//! Site Search MCP Server - in-memory fuzzy search for the FirstBank website.
//!
//! The library indexes a fixed catalog of site documents (pages, sections,
//! navigation links, products, services) and answers ranked, highlighted
//! searches, type-ahead suggestions, and popular-search lookups. The binary
//! exposes the same operations as MCP tools over stdio.
//!
//! # Architecture
//!
//! - **models**: Documents, search options, and results
//! - **error**: Error types for catalog loading and configuration
//! - **config**: Configuration management from environment variables
//! - **catalog**: Document sources (built-in, JSON file, in-memory)
//! - **matching**: Levenshtein distance and fuzzy matching
//! - **search**: Tokenizer, index, scorer, snippets, and the engine
//! - **tools**: Results-page search, suggestions, recent searches
//! - **observability**: Search metrics
//! - **server**: MCP protocol server

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod search;
pub mod server;
pub mod tools;

pub use catalog::{BuiltinCatalog, DocumentSource, InMemoryCatalog, JsonFileCatalog};
pub use config::Config;
pub use error::{CatalogError, ConfigError};
pub use matching::{fuzzy_match, levenshtein_distance, FuzzyMatcher};
pub use models::{
    DocumentKind, DocumentMetadata, IndexedDocument, QueryOperator, SearchOptions, SearchResult,
};
pub use observability::MetricsTracker;
pub use search::{DocumentIndex, HighlightMarkers, SearchEngine};
pub use server::SiteSearchServer;
pub use tools::{
    Facets, RecentSearches, SearchParams, SearchResponse, SearchTools, SortBy, SortOrder,
    SuggestionTools,
};
