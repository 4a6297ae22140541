//! Observability for the search server.
//!
//! Counters for search usage; all events go through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
