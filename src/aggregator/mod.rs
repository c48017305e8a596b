//! Core aggregator implementation split into focused submodules.
//!
//! The `NewsAggregator` struct and its methods are organized by domain:
//! - [`articles`] - Article listing, pagination, and direct creation
//! - [`services`] - Background service starters
//! - [`lifecycle`] - Shutdown coordination

mod articles;
mod lifecycle;
mod services;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::fetcher::SourceFetcher;
use crate::ingest::Ingestor;

/// Main aggregator instance (cloneable - all fields are Arc-wrapped)
#[derive(Clone)]
pub struct NewsAggregator {
    /// Database instance for persistence (wrapped in Arc for sharing across tasks)
    /// Public for integration tests to inspect stored articles
    pub db: std::sync::Arc<Database>,
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: std::sync::Arc<Config>,
    /// Fetch-and-dedup coordinator shared by the scheduler and manual scrape triggers
    pub(crate) ingestor: std::sync::Arc<Ingestor>,
    /// Cancellation token observed by background tasks
    pub(crate) shutdown: tokio_util::sync::CancellationToken,
}

impl NewsAggregator {
    /// Create a new NewsAggregator instance
    ///
    /// This initializes all core components:
    /// - Opens/creates the SQLite database
    /// - Runs migrations
    /// - Builds the shared HTTP client used for listing fetches
    pub async fn new(config: Config) -> Result<Self> {
        // Initialize database
        let db = std::sync::Arc::new(Database::new(&config.persistence.database_path).await?);

        let fetcher = SourceFetcher::new()?;
        let ingestor = std::sync::Arc::new(Ingestor::new(fetcher, std::sync::Arc::clone(&db)));

        Ok(Self {
            db,
            config: std::sync::Arc::new(config),
            ingestor,
            shutdown: tokio_util::sync::CancellationToken::new(),
        })
    }
}
