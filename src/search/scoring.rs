//! Relevance scoring of one document against a tokenized query.
//!
//! Every query token is checked against the title, keywords, and body on
//! three tiers (exact, partial, fuzzy). All tiers that apply add up; there is
//! no early exit. The summed points are then multiplied by the document
//! kind's boost.

use super::index::IndexEntry;
use crate::matching::FuzzyMatcher;
use crate::models::{QueryOperator, SearchOptions};

/// Points for an exact token match in the title.
pub const EXACT_TITLE: u32 = 10;
/// Points for an exact token match in a keyword.
pub const EXACT_KEYWORD: u32 = 8;
/// Points for an exact token match in the body.
pub const EXACT_BODY: u32 = 5;
/// Points for a substring match in the title.
pub const PARTIAL_TITLE: u32 = 6;
/// Points for a substring match in a keyword.
pub const PARTIAL_KEYWORD: u32 = 4;
/// Points for a substring match in the body.
pub const PARTIAL_BODY: u32 = 2;
/// Points for a fuzzy match in the title.
pub const FUZZY_TITLE: u32 = 3;
/// Points for a fuzzy match in a keyword.
pub const FUZZY_KEYWORD: u32 = 2;
/// Points for a fuzzy match in the body.
pub const FUZZY_BODY: u32 = 1;

/// Either string contains the other. An empty string never matches.
pub fn is_partial_match(query_token: &str, target: &str) -> bool {
    if query_token.is_empty() || target.is_empty() {
        return false;
    }
    target.contains(query_token) || query_token.contains(target)
}

fn any_exact(tokens: &[String], query_token: &str) -> bool {
    tokens.iter().any(|token| token == query_token)
}

fn any_partial(tokens: &[String], query_token: &str) -> bool {
    tokens.iter().any(|token| is_partial_match(query_token, token))
}

fn any_fuzzy(
    matcher: &mut FuzzyMatcher,
    tokens: &[String],
    query_token: &str,
    threshold: f64,
) -> bool {
    tokens
        .iter()
        .any(|token| matcher.is_match(query_token, token, threshold))
}

/// Points one query token earns against one document, before the kind boost.
pub fn token_points(
    entry: &IndexEntry,
    query_token: &str,
    options: &SearchOptions,
    matcher: &mut FuzzyMatcher,
) -> u32 {
    let mut points = 0;

    if any_exact(&entry.title_tokens, query_token) {
        points += EXACT_TITLE;
    }
    if any_exact(&entry.keyword_tokens, query_token) {
        points += EXACT_KEYWORD;
    }
    if any_exact(&entry.body_tokens, query_token) {
        points += EXACT_BODY;
    }

    if options.include_partial_matches {
        if any_partial(&entry.title_tokens, query_token) {
            points += PARTIAL_TITLE;
        }
        if any_partial(&entry.keyword_tokens, query_token) {
            points += PARTIAL_KEYWORD;
        }
        if any_partial(&entry.body_tokens, query_token) {
            points += PARTIAL_BODY;
        }
    }

    if options.fuzzy_enabled() {
        let threshold = options.fuzzy_threshold;
        if any_fuzzy(matcher, &entry.title_tokens, query_token, threshold) {
            points += FUZZY_TITLE;
        }
        if any_fuzzy(matcher, &entry.keyword_tokens, query_token, threshold) {
            points += FUZZY_KEYWORD;
        }
        if any_fuzzy(matcher, &entry.body_tokens, query_token, threshold) {
            points += FUZZY_BODY;
        }
    }

    points
}

/// Score a document for a query. Zero means "not a match".
///
/// `options` is expected to be normalized already.
pub fn score_document(
    entry: &IndexEntry,
    query_tokens: &[String],
    options: &SearchOptions,
    matcher: &mut FuzzyMatcher,
) -> f64 {
    let mut total: u32 = 0;

    for query_token in query_tokens {
        let points = token_points(entry, query_token, options, matcher);
        if points == 0 && options.operator == QueryOperator::And {
            return 0.0;
        }
        total += points;
    }

    f64::from(total) * entry.document.kind.boost()
}
