//! Per-query search options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default minimum similarity for a fuzzy token match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Default cap on returned results.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default minimum query token length.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 2;

/// How multiple query tokens combine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryOperator {
    /// Every token's contributions are summed; any matching token admits the document
    #[default]
    Or,
    /// Every token must contribute to the score for the document to be kept
    And,
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => f.write_str("OR"),
            Self::And => f.write_str("AND"),
        }
    }
}

impl FromStr for QueryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OR" => Ok(Self::Or),
            "AND" => Ok(Self::And),
            other => Err(format!("Unknown query operator: {}", other)),
        }
    }
}

/// Options controlling a single `search` call.
///
/// Values are tolerated as given; [`SearchOptions::normalized`] clamps them
/// into range before scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Minimum normalized similarity (0.0-1.0) for a fuzzy match; 0 disables fuzzy tiers
    pub fuzzy_threshold: f64,

    /// Maximum number of results returned
    pub max_results: usize,

    /// Query tokens shorter than this are discarded
    pub min_keyword_length: usize,

    /// Whether substring containment counts as a match tier
    pub include_partial_matches: bool,

    /// How query tokens combine
    pub operator: QueryOperator,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
            include_partial_matches: true,
            operator: QueryOperator::Or,
        }
    }
}

impl SearchOptions {
    /// Set the fuzzy threshold.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the minimum query token length.
    pub fn with_min_keyword_length(mut self, min_keyword_length: usize) -> Self {
        self.min_keyword_length = min_keyword_length;
        self
    }

    /// Enable or disable the partial-match tier.
    pub fn with_partial_matches(mut self, include: bool) -> Self {
        self.include_partial_matches = include;
        self
    }

    /// Set the token operator.
    pub fn with_operator(mut self, operator: QueryOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Return a copy with the fuzzy threshold clamped to [0, 1].
    ///
    /// A NaN threshold falls back to the default.
    pub fn normalized(self) -> Self {
        let fuzzy_threshold = if self.fuzzy_threshold.is_nan() {
            DEFAULT_FUZZY_THRESHOLD
        } else {
            self.fuzzy_threshold.clamp(0.0, 1.0)
        };

        Self {
            fuzzy_threshold,
            ..self
        }
    }

    /// Whether the fuzzy tiers take part in scoring.
    pub fn fuzzy_enabled(&self) -> bool {
        self.fuzzy_threshold > 0.0
    }
}
