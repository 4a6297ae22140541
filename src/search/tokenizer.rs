//! Tokenizer shared by queries, titles, and bodies.
//!
//! Lower-cases the text, turns punctuation into whitespace, splits, and drops
//! English stop words. Because documents and queries go through the same
//! function, matching is symmetric.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Common English function words that never become tokens.
pub const STOP_WORDS: &[&str] = &[
    // articles and conjunctions
    "the", "a", "an", "and", "or", "but",
    // prepositions
    "in", "on", "at", "to", "for", "of", "with", "by",
    // auxiliary and modal verbs
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can",
    // demonstratives
    "this", "that", "these", "those",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Failed to compile non-word regex"));

/// Whether a lower-cased word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Split text into normalized, order-preserving tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
