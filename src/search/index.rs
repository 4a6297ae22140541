//! Document index built once from a catalog.
//!
//! Each entry keeps the original document alongside its pre-tokenized title,
//! body, and lower-cased keywords, so queries never re-tokenize document text.

use super::tokenizer::tokenize;
use crate::catalog::DocumentSource;
use crate::error::{CatalogError, CatalogResult};
use crate::models::IndexedDocument;
use std::collections::HashSet;

/// A document plus its precomputed match material.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// The catalog document
    pub document: IndexedDocument,

    /// Tokens of the title
    pub title_tokens: Vec<String>,

    /// Tokens of the body
    pub body_tokens: Vec<String>,

    /// Keywords, trimmed and lower-cased; blank keywords are dropped
    pub keyword_tokens: Vec<String>,
}

impl IndexEntry {
    fn new(document: IndexedDocument) -> Self {
        let title_tokens = tokenize(&document.title);
        let body_tokens = tokenize(&document.body);
        let keyword_tokens = document
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self {
            document,
            title_tokens,
            body_tokens,
            keyword_tokens,
        }
    }
}

/// Immutable, ordered collection of indexed documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    entries: Vec<IndexEntry>,
}

impl DocumentIndex {
    /// Build an index from documents, keeping their order.
    ///
    /// # Errors
    /// Returns a `CatalogError` for an empty or duplicate id, or an empty
    /// title or body.
    pub fn build(documents: Vec<IndexedDocument>) -> CatalogResult<Self> {
        let mut seen_ids: HashSet<String> = HashSet::with_capacity(documents.len());
        let mut entries = Vec::with_capacity(documents.len());

        for document in documents {
            if document.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if document.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(document.id));
            }
            if document.body.trim().is_empty() {
                return Err(CatalogError::EmptyBody(document.id));
            }
            if !seen_ids.insert(document.id.clone()) {
                return Err(CatalogError::DuplicateId(document.id));
            }
            if document.keywords.is_empty() {
                tracing::debug!(id = %document.id, "Indexing document without keywords");
            }

            entries.push(IndexEntry::new(document));
        }

        Ok(Self { entries })
    }

    /// Load documents from a source and build the index.
    pub fn from_source(source: &dyn DocumentSource) -> CatalogResult<Self> {
        let documents = source.load()?;
        let index = Self::build(documents)?;
        tracing::info!(
            source = source.name(),
            documents = index.len(),
            "Search index built"
        );
        Ok(index)
    }

    /// All entries in index order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Look up a document by ID.
    pub fn get(&self, id: &str) -> Option<&IndexedDocument> {
        self.entries
            .iter()
            .map(|entry| &entry.document)
            .find(|doc| doc.id == id)
    }

    /// Get the number of indexed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
