//! Fuzzy matching utilities for search tokens.
//!
//! This module provides edit-distance matching used by the relevance scorer
//! when exact and partial matching fail.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{fuzzy_match, levenshtein_distance, FuzzyMatcher};
