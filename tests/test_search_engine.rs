//! Integration tests for ranked search over the built-in site catalog.

use site_search_mcp::search::{DocumentIndex, HighlightMarkers};
use site_search_mcp::{
    CatalogError, DocumentKind, IndexedDocument, QueryOperator, SearchEngine, SearchOptions,
};

fn engine() -> SearchEngine {
    SearchEngine::with_builtin_catalog().expect("built-in catalog should index")
}

fn ids(results: &[site_search_mcp::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_savings_account_ranks_firstsave_first() {
    let engine = engine();
    let results = engine.search("savings account", &SearchOptions::default());

    let top = &results[0];
    assert_eq!(top.id, "savings-account");
    assert_eq!(top.title, "FirstSave Account");
    assert_eq!(top.kind, DocumentKind::Product);
    assert!(top.matched_keywords.contains(&"savings".to_string()));
    assert!(top.matched_keywords.contains(&"account".to_string()));

    // exact, partial and fuzzy tiers for both tokens, times the product boost
    assert!((top.relevance_score - 81.9).abs() < 1e-9);
}

#[test]
fn test_keyword_contribution_counts() {
    let engine = engine();
    let with_keywords = engine.search("savings", &SearchOptions::default());
    let firstsave = with_keywords
        .iter()
        .find(|r| r.id == "savings-account")
        .expect("FirstSave should match savings");

    // body exact 5 + keyword exact 8 + partial 4 + 2 + fuzzy 2 + 1
    assert!((firstsave.relevance_score - 22.0 * 1.3).abs() < 1e-9);
}

#[test]
fn test_results_sorted_and_positive() {
    let engine = engine();
    for query in ["banking", "loans interest", "mobile app", "secure login", "cards"] {
        let results = engine.search(query, &SearchOptions::default());
        assert!(!results.is_empty(), "{} should match something", query);
        assert!(results.iter().all(|r| r.relevance_score > 0.0));
        assert!(results
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }
}

#[test]
fn test_max_results_respected() {
    let engine = engine();
    let options = SearchOptions::default().with_max_results(3);
    assert_eq!(engine.search("banking", &options).len(), 3);

    let options = SearchOptions::default().with_max_results(0);
    assert!(engine.search("banking", &options).is_empty());
}

#[test]
fn test_blank_and_stop_word_queries() {
    let engine = engine();
    let options = SearchOptions::default();
    assert!(engine.search("", &options).is_empty());
    assert!(engine.search("   ", &options).is_empty());
    assert!(engine.search("the and with", &options).is_empty());
    assert!(engine.search("?!.,", &options).is_empty());
}

#[test]
fn test_unrelated_query_is_empty() {
    let engine = engine();
    assert!(engine.search("xyzzy", &SearchOptions::default()).is_empty());
}

#[test]
fn test_unrelated_query_on_synthetic_index() {
    let engine = SearchEngine::from_documents(vec![IndexedDocument::new(
        "loans",
        "Personal Loans",
        "Quick approval and flexible repayment.",
        "/loans",
        DocumentKind::Product,
        "Loans",
        &["loans"],
    )])
    .unwrap();

    assert!(engine
        .search("xyzzy-not-present", &SearchOptions::default())
        .is_empty());
}

#[test]
fn test_every_title_finds_its_document() {
    let engine = engine();
    let options = SearchOptions::default().with_max_results(100);

    for entry in engine.index().entries() {
        let doc = &entry.document;
        let results = engine.search(&doc.title, &options);
        assert!(
            results.iter().any(|r| r.id == doc.id),
            "searching {:?} should return {}",
            doc.title,
            doc.id
        );
    }
}

#[test]
fn test_highlight_markup() {
    let engine = engine();
    let results = engine.search("loans", &SearchOptions::default());
    let personal = results
        .iter()
        .find(|r| r.id == "personal-loans")
        .expect("personal loans should match");

    assert_eq!(
        personal.highlighted_title,
        r#"Personal <mark class="bg-yellow-200 px-1 rounded">Loans</mark>"#
    );
    assert!(personal
        .highlighted_snippet
        .contains(r#"<mark class="bg-yellow-200 px-1 rounded">loans</mark>"#));
}

#[test]
fn test_custom_highlight_markers() {
    let engine = engine().with_highlight_markers(HighlightMarkers::new("[", "]"));
    let results = engine.search("treasury", &SearchOptions::default());
    let bills = results
        .iter()
        .find(|r| r.id == "treasury-bills")
        .expect("treasury bills should match");
    assert_eq!(bills.highlighted_title, "[Treasury] Bills");
}

#[test]
fn test_snippet_picks_best_sentence() {
    let engine = engine();
    let results = engine.search("years", &SearchOptions::default());
    let home = results
        .iter()
        .find(|r| r.id == "home-loans")
        .expect("home loans should match years");

    // the decimal point in "8.5%" ends a sentence too
    assert_eq!(
        home.snippet,
        "5% interest rate up to $500,000 for up to 30 years"
    );
}

#[test]
fn test_snippets_bounded() {
    let engine = engine();
    let results = engine.search("banking", &SearchOptions::default().with_max_results(100));
    for result in results {
        assert!(result.snippet.chars().count() <= 150, "{}", result.snippet);
    }
}

#[test]
fn test_raising_threshold_never_adds_results() {
    let engine = engine();
    for query in ["savngs", "acount", "morgage", "banking", "suport team"] {
        let loose = SearchOptions::default()
            .with_fuzzy_threshold(0.5)
            .with_max_results(100);
        let strict = loose.with_fuzzy_threshold(1.0);
        assert!(
            engine.search(query, &strict).len() <= engine.search(query, &loose).len(),
            "{}",
            query
        );
    }
}

#[test]
fn test_fuzzy_match_recovers_typos() {
    let engine = engine();
    let results = engine.search("morgage", &SearchOptions::default());
    assert!(ids(&results).contains(&"home-loans"));

    let no_fuzzy = SearchOptions::default()
        .with_fuzzy_threshold(0.0)
        .with_partial_matches(false);
    assert!(engine.search("morgage", &no_fuzzy).is_empty());
}

#[test]
fn test_and_operator_requires_every_token() {
    let engine = engine();
    let or = SearchOptions::default().with_max_results(100);
    let and = or.with_operator(QueryOperator::And);

    let or_results = engine.search("savings treasury", &or);
    let and_results = engine.search("savings treasury", &and);

    assert!(ids(&or_results).contains(&"savings-account"));
    assert!(ids(&or_results).contains(&"treasury-bills"));
    assert!(!ids(&and_results).contains(&"savings-account"));
    assert!(!ids(&and_results).contains(&"treasury-bills"));
    assert!(and_results.len() <= or_results.len());
}

#[test]
fn test_suggestions() {
    let engine = engine();
    let suggestions = engine.get_suggestions("sav", 5);
    assert_eq!(suggestions, vec!["savings", "firstsave"]);
    assert!(suggestions.iter().all(|s| s.chars().count() > 2));

    assert!(engine.get_suggestions("s", 5).is_empty());
    assert!(engine.get_suggestions("ban", 5).len() <= 5);
    assert_eq!(engine.get_suggestions("ban", 2).len(), 2);
}

#[test]
fn test_suggestions_keep_keyword_case() {
    let engine = engine();
    assert!(engine.get_suggestions("sm", 5).contains(&"SME".to_string()));
}

#[test]
fn test_popular_searches() {
    let engine = engine();
    assert_eq!(
        engine.get_popular_searches(),
        &[
            "savings account",
            "credit card",
            "personal loan",
            "mobile banking",
            "online banking",
            "home loan",
            "business account",
            "investment",
            "fixed deposit",
            "customer support",
        ]
    );
}

#[test]
fn test_invalid_catalog_rejected() {
    let doc = IndexedDocument::new(
        "dup",
        "Title",
        "Body text.",
        "/dup",
        DocumentKind::Page,
        "Cat",
        &[],
    );
    let result = DocumentIndex::build(vec![doc.clone(), doc]);
    assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "dup"));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.search("mobile banking", &SearchOptions::default()))
        })
        .collect();

    let expected = engine.search("mobile banking", &SearchOptions::default());
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
