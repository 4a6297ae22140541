//! MCP server for the site search.
//!
//! Exposes search, suggestions, and popular/recent searches to AI assistants
//! through the Model Context Protocol.

pub mod handlers;

pub use handlers::SiteSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server over stdio until the client disconnects.
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: SiteSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
