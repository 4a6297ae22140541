//! Data models for the site search engine.
//!
//! This module contains the catalog document, per-query options, and the
//! result record handed back to the UI layer.

pub mod document;
pub mod options;
pub mod result;

pub use document::{DocumentKind, DocumentMetadata, IndexedDocument};
pub use options::{QueryOperator, SearchOptions};
pub use result::SearchResult;
