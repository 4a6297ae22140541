//! Tools backing the MCP server.
//!
//! - **Search**: ranked results page with filters, sorting, and pagination
//! - **Suggestions**: type-ahead, popular, and recent searches

pub mod recent;
pub mod search;
pub mod suggestions;

pub use recent::{RecentSearches, DEFAULT_RECENT_CAPACITY};
pub use search::{
    search_url, Facets, SearchParams, SearchResponse, SearchTools, SortBy, SortOrder,
    DEFAULT_PAGE_SIZE,
};
pub use suggestions::SuggestionTools;
