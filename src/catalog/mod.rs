//! Document catalogs the search index is built from.
//!
//! The engine never hard-codes its content; it is handed a [`DocumentSource`].

mod builtin;
mod json_file;
mod memory;
mod traits;

pub use builtin::{builtin_documents, BuiltinCatalog};
pub use json_file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
pub use traits::DocumentSource;
