use super::traits::DocumentSource;
use crate::error::CatalogResult;
use crate::models::IndexedDocument;

/// Document source over an owned list, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    documents: Vec<IndexedDocument>,
}

impl InMemoryCatalog {
    /// Create a catalog from documents.
    pub fn new(documents: Vec<IndexedDocument>) -> Self {
        Self { documents }
    }

    /// Append a document.
    pub fn push(&mut self, document: IndexedDocument) {
        self.documents.push(document);
    }
}

impl From<Vec<IndexedDocument>> for InMemoryCatalog {
    fn from(documents: Vec<IndexedDocument>) -> Self {
        Self::new(documents)
    }
}

impl DocumentSource for InMemoryCatalog {
    fn load(&self) -> CatalogResult<Vec<IndexedDocument>> {
        Ok(self.documents.clone())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
