//! Periodic scrape scheduling.
//!
//! Drives the ingest coordinator on a fixed period. The tick timer is armed
//! before each cycle starts, so a cycle that overruns the period rolls
//! straight into the next one; the effective inter-cycle gap is
//! max(period, cycle duration). Ticks are never skipped or coalesced.

use crate::ingest::Ingestor;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically runs scrape cycles until cancelled
pub struct ScrapeScheduler {
    /// Coordinator invoked once per cycle
    ingestor: Arc<Ingestor>,

    /// Source addresses handed to every cycle
    sources: Vec<String>,

    /// Gap between cycle starts
    interval: Duration,

    /// Cooperative shutdown signal
    shutdown: CancellationToken,
}

impl ScrapeScheduler {
    /// Create a new scheduler
    pub fn new(
        ingestor: Arc<Ingestor>,
        sources: Vec<String>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            ingestor,
            sources,
            interval,
            shutdown,
        }
    }

    /// Run the scheduler loop until the shutdown token fires
    ///
    /// The first cycle starts immediately. Each later cycle starts once the
    /// previous cycle has finished and its tick has elapsed, whichever is
    /// later. A cycle in flight is never interrupted; cancellation takes
    /// effect at the next loop iteration.
    pub async fn run(self) {
        info!(
            interval_secs = self.interval.as_secs(),
            sources = self.sources.len(),
            "Scrape scheduler started"
        );

        loop {
            if self.shutdown.is_cancelled() {
                break;
            }

            // Arm the next tick before the cycle so cycle duration counts
            // against the period
            let next_tick = Instant::now() + self.interval;

            self.ingestor.run_cycle(&self.sources).await;

            debug!("Waiting for next scrape tick");
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    break;
                }
                _ = sleep_until(next_tick) => {}
            }
        }

        info!("Scrape scheduler stopped");
    }
}
