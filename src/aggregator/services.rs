//! Background service starters.

use crate::error::Result;
use crate::scheduler::ScrapeScheduler;

use super::NewsAggregator;

impl NewsAggregator {
    /// Start the periodic scrape scheduler background task
    ///
    /// The returned handle completes when the scheduler stops, which happens
    /// once the aggregator's shutdown token is cancelled.
    pub fn start_scrape_scheduler(&self) -> tokio::task::JoinHandle<()> {
        let sources = self.config.scrape.sources.clone();

        if sources.is_empty() {
            tracing::info!("No scrape sources configured, skipping scrape scheduler");
            return tokio::spawn(async {});
        }

        let scheduler = ScrapeScheduler::new(
            std::sync::Arc::clone(&self.ingestor),
            sources,
            self.config.scrape.interval,
            self.shutdown.clone(),
        );

        let handle = tokio::spawn(async move {
            scheduler.run().await;
        });

        tracing::info!("Scrape scheduler background task started");

        handle
    }

    /// Spawn the REST API server in a background task
    ///
    /// The server runs concurrently with the scrape scheduler and listens on
    /// the configured bind address (default: 127.0.0.1:8080).
    pub fn spawn_api_server(self: &std::sync::Arc<Self>) -> tokio::task::JoinHandle<Result<()>> {
        let aggregator = self.clone();
        let config = self.config.clone();

        tokio::spawn(async move { crate::api::start_api_server(aggregator, config).await })
    }
}
