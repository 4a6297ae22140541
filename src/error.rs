//! Error types for the site search server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Searching itself never fails; errors only arise while loading the catalog
//! or the configuration.

use thiserror::Error;

/// Errors that can occur while loading or validating a document catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for a document list
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two documents share an ID
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    /// A document has an empty ID
    #[error("Document id cannot be empty")]
    EmptyId,

    /// A document has an empty title
    #[error("Document {0} has an empty title")]
    EmptyTitle(String),

    /// A document has an empty body
    #[error("Document {0} has an empty body")]
    EmptyBody(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
