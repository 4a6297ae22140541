//! MCP tool handlers for the site search server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::config::Config;
use crate::models::{DocumentKind, QueryOperator};
use crate::observability::MetricsTracker;
use crate::search::SearchEngine;
use crate::tools::{
    RecentSearches, SearchParams, SearchTools, SortBy, SortOrder, SuggestionTools,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing site search to assistants.
#[derive(Clone)]
pub struct SiteSearchServer {
    search_tools: SearchTools,
    suggestion_tools: SuggestionTools,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for SiteSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "site-search-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the FirstBank website search - ranked fuzzy search over site pages, products, and services, plus search suggestions.".into()),
        }
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
struct SearchSiteParams {
    query: String,
    #[serde(default)]
    fuzzy_threshold: Option<f64>,
    #[serde(default)]
    max_results: Option<usize>,
    /// "OR" (default) or "AND"
    #[serde(default)]
    operator: Option<String>,
    /// Any of: page, section, navigation, product, service
    #[serde(default)]
    kinds: Option<Vec<String>>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    /// "relevance" (default), "title" or "kind"
    #[serde(default)]
    sort_by: Option<String>,
    /// "desc" (default) or "asc"
    #[serde(default)]
    sort_order: Option<String>,
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    page_size: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SuggestionParams {
    query: String,
    #[serde(default)]
    limit: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

fn parse_optional<T>(value: Option<&str>) -> Result<T, String>
where
    T: std::str::FromStr<Err = String> + Default,
{
    value.map_or_else(|| Ok(T::default()), str::parse)
}

/// Convert wire parameters into a results-page request.
fn to_search_params(params: SearchSiteParams) -> Result<SearchParams, String> {
    let operator = params
        .operator
        .as_deref()
        .map(str::parse::<QueryOperator>)
        .transpose()?;

    let kinds = params
        .kinds
        .unwrap_or_default()
        .iter()
        .map(|kind| kind.parse::<DocumentKind>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchParams {
        query: params.query,
        fuzzy_threshold: params.fuzzy_threshold,
        max_results: params.max_results,
        operator,
        kinds,
        categories: params.categories.unwrap_or_default(),
        sort_by: parse_optional::<SortBy>(params.sort_by.as_deref())?,
        sort_order: parse_optional::<SortOrder>(params.sort_order.as_deref())?,
        page: params.page,
        page_size: params.page_size,
    })
}

#[tool_router]
impl SiteSearchServer {
    /// Create a new site search server.
    pub fn new(engine: Arc<SearchEngine>, config: &Config, metrics: MetricsTracker) -> Self {
        let recent = Arc::new(RecentSearches::default());

        let search_tools = SearchTools::new(
            engine.clone(),
            config.search_options(),
            config.page_size,
            recent.clone(),
            metrics.clone(),
        );

        let suggestion_tools =
            SuggestionTools::new(engine, recent, config.suggestion_limit, metrics);

        Self {
            search_tools,
            suggestion_tools,
            tool_router: Self::tool_router(),
        }
    }

    fn search_json(&self, params: SearchSiteParams) -> Result<Value, String> {
        let response = self.search_tools.search(to_search_params(params)?);
        serde_json::to_value(response).map_err(|e| e.to_string())
    }

    fn suggestions_json(&self, params: SuggestionParams) -> Value {
        let suggestions = self
            .suggestion_tools
            .suggestions(&params.query, params.limit);
        json!({
            "query": params.query,
            "suggestions": suggestions,
        })
    }

    /// Search the site for pages, products, and services.
    #[tool(
        description = "Search the bank website for pages, products, services, and sections using fuzzy matching. Supports kind and category filters, sorting by relevance, title, or kind, and pagination. Returns ranked results with highlighted snippets and facets."
    )]
    async fn search_site(
        &self,
        params: Parameters<SearchSiteParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.search_json(params.0).map_err(invalid_params)?;
        json_result(&response)
    }

    /// Suggest completions for a partially typed query.
    #[tool(
        description = "Suggest keywords and title words that contain a partially typed query (at least 2 characters)."
    )]
    async fn get_search_suggestions(
        &self,
        params: Parameters<SuggestionParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.suggestions_json(params.0))
    }

    /// List popular searches.
    #[tool(description = "List popular searches on the bank website")]
    async fn get_popular_searches(&self) -> Result<CallToolResult, McpError> {
        json_result(&json!({ "popular": self.suggestion_tools.popular() }))
    }

    /// List recently submitted searches.
    #[tool(description = "List searches submitted to this server, most recent first")]
    async fn get_recent_searches(&self) -> Result<CallToolResult, McpError> {
        json_result(&json!({ "recent": self.suggestion_tools.recent() }))
    }
}
