//! Site Search MCP Server - Main entry point
//!
//! Builds the search index from the configured catalog and serves the search
//! tools over stdio.

use anyhow::Result;
use site_search_mcp::{
    BuiltinCatalog, Config, DocumentSource, JsonFileCatalog, MetricsTracker, SearchEngine,
    SiteSearchServer,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL; stderr only so stdout stays MCP-clean
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let source: Box<dyn DocumentSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(BuiltinCatalog::new()),
    };

    let engine = match SearchEngine::new(source.as_ref()) {
        Ok(engine) => engine.with_max_query_chars(config.max_query_chars),
        Err(e) => {
            error!("Failed to build search index from {}: {}", source.name(), e);
            return Err(e.into());
        }
    };

    info!(
        catalog = source.name(),
        documents = engine.document_count(),
        fuzzy_threshold = config.fuzzy_threshold,
        max_results = config.max_results,
        "Site search initialized"
    );

    let metrics = MetricsTracker::new();
    let server = SiteSearchServer::new(Arc::new(engine), &config, metrics.clone());

    info!("Starting MCP server with stdio transport");
    site_search_mcp::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Site search server shutdown complete");
    Ok(())
}
