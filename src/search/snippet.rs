//! Snippet selection and match highlighting.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Maximum snippet length in characters, including the ellipsis.
pub const MAX_SNIPPET_LENGTH: usize = 150;

/// Marker appended to truncated snippets.
pub const ELLIPSIS: &str = "...";

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Failed to compile sentence regex"));

/// Opening and closing markup wrapped around highlighted matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkers {
    pub open: String,
    pub close: String,
}

impl HighlightMarkers {
    /// Create markers from any open/close pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for HighlightMarkers {
    fn default() -> Self {
        Self::new(r#"<mark class="bg-yellow-200 px-1 rounded">"#, "</mark>")
    }
}

/// Pick the body sentence with the most query tokens and trim it to length.
///
/// Sentences end at runs of `.`, `!`, or `?`. The first sentence wins ties,
/// including when no sentence matches at all.
pub fn generate_snippet(body: &str, query_tokens: &[String], max_length: usize) -> String {
    let lowered_tokens: Vec<String> = query_tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut best: Option<&str> = None;
    let mut best_matches = 0;

    for sentence in SENTENCE_END_RE
        .split(body)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let sentence_lower = sentence.to_lowercase();
        let matches = lowered_tokens
            .iter()
            .filter(|token| sentence_lower.contains(token.as_str()))
            .count();

        if best.is_none() || matches > best_matches {
            best = Some(sentence);
            best_matches = matches;
        }
    }

    let sentence = best.unwrap_or_default();
    if sentence.chars().count() <= max_length {
        return sentence.to_string();
    }

    truncate_on_word(sentence, max_length)
}

/// Keep whole words while the result plus the ellipsis fits in `max_length`.
/// An overlong first word leaves only the ellipsis.
fn truncate_on_word(text: &str, max_length: usize) -> String {
    let budget = max_length.saturating_sub(ELLIPSIS.len());
    let mut snippet = String::new();
    let mut snippet_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let separator = usize::from(snippet_chars > 0);

        if snippet_chars + separator + word_chars > budget {
            break;
        }

        if separator == 1 {
            snippet.push(' ');
        }
        snippet.push_str(word);
        snippet_chars += separator + word_chars;
    }

    snippet.push_str(ELLIPSIS);
    snippet
}

/// Wrap every case-insensitive occurrence of each query token in markers.
///
/// Occurrences of all tokens are gathered first; overlapping or touching
/// spans are merged so markup never nests.
pub fn highlight_matches(text: &str, query_tokens: &[String], markers: &HighlightMarkers) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for token in query_tokens.iter().filter(|t| !t.is_empty()) {
        let pattern = match RegexBuilder::new(&regex::escape(token))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!(token = %token, "Skipping highlight for token: {}", e);
                continue;
            }
        };

        spans.extend(pattern.find_iter(text).map(|m| (m.start(), m.end())));
    }

    if spans.is_empty() {
        return text.to_string();
    }

    spans.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(
        text.len() + merged.len() * (markers.open.len() + markers.close.len()),
    );
    let mut cursor = 0;
    for (start, end) in merged {
        out.push_str(&text[cursor..start]);
        out.push_str(&markers.open);
        out.push_str(&text[start..end]);
        out.push_str(&markers.close);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
