//! Shutdown coordination.

use super::NewsAggregator;

impl NewsAggregator {
    /// Gracefully shut down background work
    ///
    /// Cancels the shutdown token observed by the scrape scheduler. A scrape
    /// cycle already in flight finishes its store writes before the scheduler
    /// loop exits, so no partially reconciled source is left behind.
    pub async fn shutdown(&self) {
        tracing::info!("Initiating graceful shutdown");

        self.shutdown.cancel();

        // Close database connections
        // Note: Database is in an Arc shared with background tasks, so we
        // can't consume it directly. The connection pool will be closed when
        // the last Arc reference is dropped; closing it here would fail store
        // writes in a cycle that is still draining.
        tracing::info!(
            "Shutdown complete - database connections will close when aggregator is dropped"
        );
    }
}
