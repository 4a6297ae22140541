//! Search tools for the site results page.
//!
//! Wraps the engine with what the results page adds on top of ranking:
//! kind and category filters, re-sorting, pagination, facets, and the
//! recent-search history.

use super::recent::RecentSearches;
use crate::models::{DocumentKind, QueryOperator, SearchOptions, SearchResult};
use crate::observability::{MetricsTracker, Timer};
use crate::search::SearchEngine;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field the results page is sorted by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Title,
    Kind,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "title" => Ok(Self::Title),
            // the site's own name for kind
            "kind" | "type" => Ok(Self::Kind),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relevance => f.write_str("relevance"),
            Self::Title => f.write_str("title"),
            Self::Kind => f.write_str("kind"),
        }
    }
}

/// Sort direction. `Desc` puts the highest score, or the last title, first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// Parameters for a results-page search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search query string
    pub query: String,

    /// Fuzzy similarity threshold (0.0-1.0); server default when unset
    pub fuzzy_threshold: Option<f64>,

    /// Cap on engine results before filtering; server default when unset
    pub max_results: Option<usize>,

    /// Token combination; OR when unset
    pub operator: Option<QueryOperator>,

    /// Keep only these kinds (empty keeps all)
    pub kinds: Vec<DocumentKind>,

    /// Keep only these categories (empty keeps all)
    pub categories: Vec<String>,

    pub sort_by: SortBy,

    pub sort_order: SortOrder,

    /// 1-based page number (default: 1)
    pub page: Option<usize>,

    /// Results per page (default: server page size)
    pub page_size: Option<usize>,
}

impl SearchParams {
    /// Parameters for `query` with every other field defaulted.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Distinct kinds and categories present in a filtered result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Facets {
    pub kinds: Vec<DocumentKind>,
    pub categories: Vec<String>,
}

impl Facets {
    fn from_results(results: &[SearchResult]) -> Self {
        let mut facets = Self::default();
        for result in results {
            if !facets.kinds.contains(&result.kind) {
                facets.kinds.push(result.kind);
            }
            if !facets.categories.contains(&result.category) {
                facets.categories.push(result.category.clone());
            }
        }
        facets
    }
}

/// One page of search results plus paging and facet metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,

    /// Results left after filtering, across all pages
    pub total_results: usize,

    pub page: usize,

    pub page_size: usize,

    pub total_pages: usize,

    /// Results on the requested page
    pub results: Vec<SearchResult>,

    pub facets: Facets,

    /// Shareable results-page link
    pub search_url: String,
}

/// Build the results-page link for a query.
pub fn search_url(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query.trim()))
}

/// Search tools for the results page.
#[derive(Clone)]
pub struct SearchTools {
    engine: Arc<SearchEngine>,
    defaults: SearchOptions,
    default_page_size: usize,
    recent: Arc<RecentSearches>,
    metrics: MetricsTracker,
}

impl SearchTools {
    /// Create new search tools.
    ///
    /// # Arguments
    /// * `engine` - Shared search engine
    /// * `defaults` - Options used where a request leaves a field unset
    /// * `default_page_size` - Page size used when a request leaves it unset
    /// * `recent` - History every submitted query is recorded into
    /// * `metrics` - Tracker for search counters
    pub fn new(
        engine: Arc<SearchEngine>,
        defaults: SearchOptions,
        default_page_size: usize,
        recent: Arc<RecentSearches>,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            engine,
            defaults,
            default_page_size: default_page_size.max(1),
            recent,
            metrics,
        }
    }

    /// Run a search and shape it into one results page.
    ///
    /// Never fails: blank queries give an empty page, a page past the end
    /// gives an empty `results` with the totals still filled in, and a zero
    /// page or page size falls back to the defaults.
    pub fn search(&self, params: SearchParams) -> SearchResponse {
        let timer = Timer::new("search");
        let query = params.query.trim().to_string();
        self.recent.record(&query);

        let options = self.options_for(&params);
        let mut results = self.engine.search(&query, &options);

        if !params.kinds.is_empty() {
            results.retain(|r| params.kinds.contains(&r.kind));
        }
        if !params.categories.is_empty() {
            results.retain(|r| params.categories.iter().any(|c| c == &r.category));
        }

        sort_results(&mut results, params.sort_by, params.sort_order);

        let facets = Facets::from_results(&results);
        let total_results = results.len();
        let page_size = params
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(self.default_page_size);
        let page = params.page.filter(|&page| page > 0).unwrap_or(1);
        let total_pages = total_results.div_ceil(page_size);

        let results: Vec<SearchResult> = results
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        self.metrics
            .track_search_query(timer.finish(), total_results);

        SearchResponse {
            search_url: search_url(&query),
            query,
            total_results,
            page,
            page_size,
            total_pages,
            results,
            facets,
        }
    }

    fn options_for(&self, params: &SearchParams) -> SearchOptions {
        let mut options = self.defaults;
        if let Some(threshold) = params.fuzzy_threshold {
            options = options.with_fuzzy_threshold(threshold);
        }
        if let Some(max_results) = params.max_results {
            options = options.with_max_results(max_results);
        }
        if let Some(operator) = params.operator {
            options = options.with_operator(operator);
        }
        options
    }

    /// The history queries are recorded into.
    pub fn recent(&self) -> &Arc<RecentSearches> {
        &self.recent
    }
}

/// Stable sort; ties keep the engine's relevance order.
fn sort_results(results: &mut [SearchResult], sort_by: SortBy, order: SortOrder) {
    results.sort_by(|a, b| {
        let ascending = match sort_by {
            SortBy::Relevance => a.relevance_score.total_cmp(&b.relevance_score),
            SortBy::Title => compare_titles(&a.title, &b.title),
            SortBy::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        };
        match order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    });
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexedDocument;

    fn doc(id: &str, title: &str, kind: DocumentKind, category: &str) -> IndexedDocument {
        IndexedDocument::new(
            id,
            title,
            &format!("{} covers banking for everyone.", title),
            &format!("/{}", id),
            kind,
            category,
            &["banking"],
        )
    }

    fn tools() -> SearchTools {
        let engine = SearchEngine::from_documents(vec![
            doc("a", "Alpha Banking", DocumentKind::Section, "Personal"),
            doc("b", "Beta Banking", DocumentKind::Page, "Business"),
            doc("c", "Gamma Banking", DocumentKind::Product, "Personal"),
            doc("d", "Delta Banking", DocumentKind::Service, "Business"),
        ])
        .unwrap();

        SearchTools::new(
            Arc::new(engine),
            SearchOptions::default(),
            DEFAULT_PAGE_SIZE,
            Arc::new(RecentSearches::default()),
            MetricsTracker::new(),
        )
    }

    #[test]
    fn test_default_sort_is_relevance_desc() {
        let response = tools().search(SearchParams::new("banking"));
        let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
        // page 1.5, product 1.3, service 1.2, section 1.0
        assert_eq!(ids, vec!["b", "c", "d", "a"]);
        assert_eq!(response.total_results, 4);
        assert_eq!(response.total_pages, 1);
    }

    #[test]
    fn test_sort_by_title() {
        let mut params = SearchParams::new("banking");
        params.sort_by = SortBy::Title;
        params.sort_order = SortOrder::Asc;
        let response = tools().search(params);
        let titles: Vec<&str> = response.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Alpha Banking", "Beta Banking", "Delta Banking", "Gamma Banking"]
        );
    }

    #[test]
    fn test_sort_by_kind_desc() {
        let mut params = SearchParams::new("banking");
        params.sort_by = SortBy::Kind;
        let response = tools().search(params);
        let kinds: Vec<DocumentKind> = response.results.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DocumentKind::Service,
                DocumentKind::Section,
                DocumentKind::Product,
                DocumentKind::Page
            ]
        );
    }

    #[test]
    fn test_filters_and_facets() {
        let mut params = SearchParams::new("banking");
        params.categories = vec!["Business".to_string()];
        let response = tools().search(params);

        assert_eq!(response.total_results, 2);
        assert_eq!(response.facets.categories, vec!["Business"]);
        assert_eq!(
            response.facets.kinds,
            vec![DocumentKind::Page, DocumentKind::Service]
        );

        let mut params = SearchParams::new("banking");
        params.kinds = vec![DocumentKind::Product];
        let response = tools().search(params);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, "c");
    }

    #[test]
    fn test_pagination() {
        let tools = tools();

        let mut params = SearchParams::new("banking");
        params.page_size = Some(3);
        params.page = Some(2);
        let response = tools.search(params);
        assert_eq!(response.total_pages, 2);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, "a");

        let mut params = SearchParams::new("banking");
        params.page_size = Some(3);
        params.page = Some(9);
        let response = tools.search(params);
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 4);

        let mut params = SearchParams::new("banking");
        params.page = Some(0);
        params.page_size = Some(0);
        let response = tools.search(params);
        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_blank_query() {
        let tools = tools();
        let response = tools.search(SearchParams::new("   "));
        assert_eq!(response.total_results, 0);
        assert_eq!(response.total_pages, 0);
        assert!(response.results.is_empty());
        assert!(tools.recent().is_empty());
    }

    #[test]
    fn test_records_recent_and_metrics() {
        let tools = tools();
        tools.search(SearchParams::new("  banking "));
        tools.search(SearchParams::new("nothingmatcheshere"));

        assert_eq!(tools.recent().list(), vec!["banking", "nothingmatcheshere"]);
        assert_eq!(tools.metrics.search_queries_total(), 2);
        assert_eq!(tools.metrics.zero_result_searches_total(), 1);
    }

    #[test]
    fn test_search_url_encoding() {
        assert_eq!(search_url("savings account"), "/search?q=savings%20account");
        assert_eq!(search_url(" a&b "), "/search?q=a%26b");
        let response = tools().search(SearchParams::new("banking"));
        assert_eq!(response.search_url, "/search?q=banking");
    }

    #[test]
    fn test_parse_sort_params() {
        assert_eq!("TITLE".parse::<SortBy>().unwrap(), SortBy::Title);
        assert_eq!("type".parse::<SortBy>().unwrap(), SortBy::Kind);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
