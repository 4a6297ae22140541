//! Search usage metrics.
//!
//! Counters are shared atomics, so clones of a tracker report into the same totals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Process-wide search metrics.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    search_queries_total: Arc<AtomicU64>,
    zero_result_searches_total: Arc<AtomicU64>,
    suggestion_requests_total: Arc<AtomicU64>,
    search_time_ms_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            search_queries_total: Arc::new(AtomicU64::new(0)),
            zero_result_searches_total: Arc::new(AtomicU64::new(0)),
            suggestion_requests_total: Arc::new(AtomicU64::new(0)),
            search_time_ms_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a search query.
    pub fn track_search_query(&self, duration_ms: u128, result_count: usize) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);
        let duration = u64::try_from(duration_ms).unwrap_or(u64::MAX);
        let _ = self.search_time_ms_total.fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |total| Some(total.saturating_add(duration)),
        );

        if result_count == 0 {
            self.zero_result_searches_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Search query completed"
        );
    }

    /// Track a suggestion lookup.
    pub fn track_suggestion_request(&self, suggestion_count: usize) {
        self.suggestion_requests_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(suggestion_count = suggestion_count, "Suggestions served");
    }

    /// Get the total number of search queries.
    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    /// Get the number of searches that returned nothing.
    pub fn zero_result_searches_total(&self) -> u64 {
        self.zero_result_searches_total.load(Ordering::Relaxed)
    }

    /// Get the total number of suggestion requests.
    pub fn suggestion_requests_total(&self) -> u64 {
        self.suggestion_requests_total.load(Ordering::Relaxed)
    }

    /// Get the summed search time in milliseconds.
    pub fn search_time_ms_total(&self) -> u64 {
        self.search_time_ms_total.load(Ordering::Relaxed)
    }

    /// Get the share of searches with no results (0.0 to 1.0).
    pub fn zero_result_rate(&self) -> f64 {
        let total = self.search_queries_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            self.zero_result_searches_total() as f64 / total
        }
    }

    /// Get the mean search time in milliseconds.
    pub fn average_search_ms(&self) -> f64 {
        let total = self.search_queries_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            self.search_time_ms_total() as f64 / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Search Queries: {}\n\
             Zero-Result Searches: {} ({:.2}%)\n\
             Average Search Time: {:.2}ms\n\
             Suggestion Requests: {}",
            self.search_queries_total(),
            self.zero_result_searches_total(),
            self.zero_result_rate() * 100.0,
            self.average_search_ms(),
            self.suggestion_requests_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_tracker_creation() {
        let tracker = MetricsTracker::new();
        assert_eq!(tracker.search_queries_total(), 0);
        assert_eq!(tracker.zero_result_searches_total(), 0);
        assert_eq!(tracker.suggestion_requests_total(), 0);
        assert_eq!(tracker.search_time_ms_total(), 0);
        assert_eq!(tracker.average_search_ms(), 0.0);
    }

    #[test]
    fn test_track_search_query() {
        let tracker = MetricsTracker::new();

        tracker.track_search_query(150, 5);
        assert_eq!(tracker.search_queries_total(), 1);
        assert_eq!(tracker.zero_result_searches_total(), 0);

        tracker.track_search_query(50, 0);
        assert_eq!(tracker.search_queries_total(), 2);
        assert_eq!(tracker.zero_result_searches_total(), 1);
        assert_eq!(tracker.search_time_ms_total(), 200);
        assert!((tracker.average_search_ms() - 100.0).abs() < f64::EPSILON);
        assert!((tracker.zero_result_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_search_time_saturates() {
        let tracker = MetricsTracker::new();

        tracker.track_search_query(u128::MAX, 1);
        tracker.track_search_query(5, 1);
        assert_eq!(tracker.search_time_ms_total(), u64::MAX);

        let tracker = MetricsTracker::new();
        tracker.track_search_query(u128::from(u64::MAX - 1), 1);
        tracker.track_search_query(10, 1);
        assert_eq!(tracker.search_time_ms_total(), u64::MAX);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = MetricsTracker::new();
        let clone = tracker.clone();

        clone.track_suggestion_request(3);
        assert_eq!(tracker.suggestion_requests_total(), 1);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        let duration = timer.finish();
        assert!(duration >= 10);
    }

    #[test]
    fn test_summary() {
        let tracker = MetricsTracker::new();
        tracker.track_search_query(10, 0);
        tracker.track_suggestion_request(2);

        let summary = tracker.summary();
        assert!(summary.contains("Search Queries: 1"));
        assert!(summary.contains("Zero-Result Searches: 1"));
        assert!(summary.contains("Suggestion Requests: 1"));
    }
}
