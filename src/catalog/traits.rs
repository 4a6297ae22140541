use crate::error::CatalogResult;
use crate::models::IndexedDocument;

/// Source of the documents a search index is built from.
///
/// Provides abstraction over where site content comes from,
/// enabling different implementations (built-in, JSON file, in-memory).
pub trait DocumentSource: Send + Sync {
    /// Load every document, in index order.
    fn load(&self) -> CatalogResult<Vec<IndexedDocument>>;

    /// Short human-readable name used in logs.
    fn name(&self) -> &str;
}
