//! Configuration management for the site search server.
//!
//! Everything is read from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::models::options::{
    DEFAULT_FUZZY_THRESHOLD, DEFAULT_MAX_RESULTS, DEFAULT_MIN_KEYWORD_LENGTH,
};
use crate::models::SearchOptions;
use crate::search::{DEFAULT_MAX_QUERY_CHARS, DEFAULT_SUGGESTION_LIMIT};
use crate::tools::DEFAULT_PAGE_SIZE;
use std::env;
use std::path::PathBuf;

/// Configuration for the site search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog to index; the built-in catalog when unset
    pub catalog_path: Option<PathBuf>,

    /// Default fuzzy similarity threshold (0.0-1.0, default: 0.7)
    pub fuzzy_threshold: f64,

    /// Default cap on search results (default: 20)
    pub max_results: usize,

    /// Default minimum query token length (default: 2)
    pub min_keyword_length: usize,

    /// Results per page (default: 10)
    pub page_size: usize,

    /// Default number of suggestions (default: 5)
    pub suggestion_limit: usize,

    /// Longest query considered, in characters (default: 500)
    pub max_query_chars: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SEARCH_CATALOG_PATH`: JSON catalog file (default: built-in catalog)
    /// - `SEARCH_FUZZY_THRESHOLD`: Fuzzy threshold, 0 to 1 (default: 0.7)
    /// - `SEARCH_MAX_RESULTS`: Max results per search (default: 20)
    /// - `SEARCH_MIN_KEYWORD_LENGTH`: Min query token length (default: 2)
    /// - `SEARCH_PAGE_SIZE`: Results per page (default: 10)
    /// - `SEARCH_SUGGESTION_LIMIT`: Suggestions returned (default: 5)
    /// - `SEARCH_MAX_QUERY_CHARS`: Query length bound (default: 500)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; dotenvy never prints to stdout
        let _ = dotenvy::dotenv();

        let catalog_path = env::var("SEARCH_CATALOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let fuzzy_threshold = Self::parse_env_f64("SEARCH_FUZZY_THRESHOLD", DEFAULT_FUZZY_THRESHOLD)?;
        if !(0.0..=1.0).contains(&fuzzy_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_FUZZY_THRESHOLD".to_string(),
                reason: "Must be between 0 and 1".to_string(),
            });
        }

        let max_results = Self::parse_env_usize("SEARCH_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        let min_keyword_length =
            Self::parse_env_usize("SEARCH_MIN_KEYWORD_LENGTH", DEFAULT_MIN_KEYWORD_LENGTH)?;
        let page_size = Self::parse_env_nonzero("SEARCH_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let suggestion_limit =
            Self::parse_env_usize("SEARCH_SUGGESTION_LIMIT", DEFAULT_SUGGESTION_LIMIT)?;
        let max_query_chars =
            Self::parse_env_nonzero("SEARCH_MAX_QUERY_CHARS", DEFAULT_MAX_QUERY_CHARS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            catalog_path,
            fuzzy_threshold,
            max_results,
            min_keyword_length,
            page_size,
            suggestion_limit,
            max_query_chars,
            log_level,
        })
    }

    /// Default per-query options derived from this configuration.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_fuzzy_threshold(self.fuzzy_threshold)
            .with_max_results(self.max_results)
            .with_min_keyword_length(self.min_keyword_length)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a usize that must be at least 1.
    fn parse_env_nonzero(var_name: &str, default: usize) -> ConfigResult<usize> {
        match Self::parse_env_usize(var_name, default)? {
            0 => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than 0".to_string(),
            }),
            val => Ok(val),
        }
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(parsed),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
            log_level: "error".to_string(),
        }
    }
}
