//! Bounded history of submitted queries.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Number of queries kept by default.
pub const DEFAULT_RECENT_CAPACITY: usize = 10;

/// Most-recent-last list of distinct submitted queries.
///
/// Re-submitting a query moves it to the end instead of duplicating it.
/// Once full, the oldest query is dropped.
#[derive(Debug)]
pub struct RecentSearches {
    queries: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RecentSearches {
    /// Create a history holding at most `capacity` queries.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // the deque is always left consistent, so a poisoned lock is still usable
        self.queries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a submitted query. Blank queries are ignored.
    pub fn record(&self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut queries = self.lock();
        queries.retain(|q| q != trimmed);
        if queries.len() == self.capacity {
            queries.pop_front();
        }
        queries.push_back(trimmed.to_string());
    }

    /// Snapshot of the history, oldest first.
    pub fn list(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}
