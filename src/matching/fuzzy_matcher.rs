//! Edit-distance fuzzy matching for query and document tokens.
//!
//! This module provides:
//! - Levenshtein distance with unit insert/delete/substitute costs
//! - Normalized similarity (`1 - distance / max_len`)
//! - Threshold-based token matching, case-insensitive and symmetric
//!
//! Matching runs once per query-token/document-token pair, so [`FuzzyMatcher`]
//! keeps its row and character buffers between calls.

/// Reusable Levenshtein matcher.
///
/// A matcher is cheap to create; create one per search call and reuse it for
/// every token pair of that call.
#[derive(Debug, Default)]
pub struct FuzzyMatcher {
    prev_row: Vec<usize>,
    curr_row: Vec<usize>,
    left: Vec<char>,
    right: Vec<char>,
}

impl FuzzyMatcher {
    /// Create a new FuzzyMatcher with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the Levenshtein distance between two strings, by characters.
    pub fn distance(&mut self, s1: &str, s2: &str) -> usize {
        self.left.clear();
        self.left.extend(s1.chars());
        self.right.clear();
        self.right.extend(s2.chars());
        self.distance_loaded()
    }

    /// Similarity in [0, 1] after lower-casing both strings.
    ///
    /// Returns `None` when either string is empty: an empty token never
    /// matches anything, not even another empty token.
    pub fn similarity(&mut self, s1: &str, s2: &str) -> Option<f64> {
        self.left.clear();
        self.left.extend(s1.chars().flat_map(char::to_lowercase));
        self.right.clear();
        self.right.extend(s2.chars().flat_map(char::to_lowercase));

        if self.left.is_empty() || self.right.is_empty() {
            return None;
        }

        let max_len = self.left.len().max(self.right.len());
        let distance = self.distance_loaded();
        Some(1.0 - distance as f64 / max_len as f64)
    }

    /// Whether two tokens are within the similarity threshold.
    pub fn is_match(&mut self, query: &str, target: &str, threshold: f64) -> bool {
        self.similarity(query, target)
            .is_some_and(|similarity| similarity >= threshold)
    }

    /// Two-row dynamic programming over the loaded character buffers.
    fn distance_loaded(&mut self) -> usize {
        let (len1, len2) = (self.left.len(), self.right.len());
        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        self.prev_row.clear();
        self.prev_row.extend(0..=len2);
        self.curr_row.clear();
        self.curr_row.resize(len2 + 1, 0);

        for (i, c1) in self.left.iter().enumerate() {
            self.curr_row[0] = i + 1;
            for (j, c2) in self.right.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                self.curr_row[j + 1] = (self.prev_row[j + 1] + 1)
                    .min(self.curr_row[j] + 1)
                    .min(self.prev_row[j] + cost);
            }
            std::mem::swap(&mut self.prev_row, &mut self.curr_row);
        }

        self.prev_row[len2]
    }
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    FuzzyMatcher::new().distance(s1, s2)
}

/// Whether two strings are at least `threshold` similar, ignoring case.
pub fn fuzzy_match(query: &str, target: &str, threshold: f64) -> bool {
    FuzzyMatcher::new().is_match(query, target, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("", "test"), 4);
        assert_eq!(levenshtein_distance("test", ""), 4);
        assert_eq!(levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_distance_counts_characters_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("über", "uber"), 1);
    }

    #[test]
    fn test_matcher_reuses_buffers() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.distance("banking", "banking"), 0);
        assert_eq!(matcher.distance("loan", "loans"), 1);
        assert_eq!(matcher.distance("a", "abcdefgh"), 7);
        assert_eq!(matcher.distance("abcdefgh", "a"), 7);
    }

    #[test]
    fn test_similarity() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.similarity("loans", "loans"), Some(1.0));
        assert_eq!(matcher.similarity("LOANS", "loans"), Some(1.0));
        // one edit over five characters
        let sim = matcher.similarity("loans", "loane").unwrap();
        assert!((sim - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!fuzzy_match("", "", 0.0));
        assert!(!fuzzy_match("", "savings", 0.0));
        assert!(!fuzzy_match("savings", "", 0.0));
    }

    #[test]
    fn test_threshold() {
        // "savngs" vs "savings": distance 1, max length 7
        assert!(fuzzy_match("savngs", "savings", 0.7));
        assert!(!fuzzy_match("savngs", "savings", 0.9));
        assert!(fuzzy_match("savings", "savings", 1.0));
        assert!(!fuzzy_match("xyzzy", "savings", 0.7));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(fuzzy_match("ATM", "atm", 1.0));
        assert!(fuzzy_match("FirstSave", "firstsave", 1.0));
    }
}
