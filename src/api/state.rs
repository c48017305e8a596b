//! Application state for the API server

use crate::NewsAggregator;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the aggregator instance.
#[derive(Clone)]
pub struct AppState {
    /// The main NewsAggregator instance
    pub aggregator: Arc<NewsAggregator>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(aggregator: Arc<NewsAggregator>) -> Self {
        Self { aggregator }
    }
}
