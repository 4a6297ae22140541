//! JSON file catalog.
//!
//! The file holds an array of documents using the site's field names
//! (`content`, `type`, `meta`); the model's own names are accepted too.

use super::traits::DocumentSource;
use crate::error::{CatalogError, CatalogResult};
use crate::models::IndexedDocument;
use std::path::{Path, PathBuf};

/// Document source that reads a JSON array from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
    name: String,
}

impl JsonFileCatalog {
    /// Create a catalog backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse documents from a JSON string.
    pub fn parse(json: &str) -> CatalogResult<Vec<IndexedDocument>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl DocumentSource for JsonFileCatalog {
    fn load(&self) -> CatalogResult<Vec<IndexedDocument>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.name.clone(),
            source,
        })?;

        let documents = Self::parse(&raw)?;
        tracing::debug!(
            path = %self.name,
            documents = documents.len(),
            "Loaded catalog file"
        );
        Ok(documents)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
