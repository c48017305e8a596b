//! Dedup-ingest coordination for scrape cycles.
//!
//! One cycle fans out a concurrent fetch per configured source, waits for
//! every fetch to finish, then reconciles all candidates into the store
//! sequentially under a single critical section. Fetch and store failures
//! are contained and logged; a cycle always runs to completion.

use crate::Result;
use crate::db::Database;
use crate::fetcher::SourceFetcher;
use crate::types::NewArticle;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Maximum number of source fetches in flight at once
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Coordinates scrape cycles against the article store
pub struct Ingestor {
    /// Fetcher for listing pages
    fetcher: SourceFetcher,

    /// Article store
    db: Arc<Database>,

    /// Serializes store interaction across cycles; exists-check/insert
    /// pairs from different sources must never interleave
    store_lock: Mutex<()>,
}

impl Ingestor {
    /// Create a new ingest coordinator
    pub fn new(fetcher: SourceFetcher, db: Arc<Database>) -> Self {
        Self {
            fetcher,
            db,
            store_lock: Mutex::new(()),
        }
    }

    /// Run one scrape cycle over the given source addresses
    ///
    /// All sources are fetched concurrently and the cycle waits for every
    /// fetch to settle before reconciling. A failed source only loses its
    /// own contribution for the cycle.
    pub async fn run_cycle(&self, sources: &[String]) {
        info!("Starting scrape cycle for {} sources", sources.len());

        let results: Vec<(String, Result<Vec<NewArticle>>)> = stream::iter(sources.iter().cloned())
            .map(|url| {
                let fetcher = self.fetcher.clone();
                async move {
                    let result = fetcher.fetch_listing(&url).await;
                    (url, result)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        // All fetches have settled; reconcile everything inside one
        // critical section so a concurrently triggered cycle cannot
        // interleave its own store calls with ours.
        let _guard = self.store_lock.lock().await;

        let mut stored = 0usize;
        let mut skipped = 0usize;

        for (url, result) in results {
            match result {
                Ok(candidates) => {
                    let (s, k) = self.reconcile_source(&url, candidates).await;
                    stored += s;
                    skipped += k;
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Source fetch failed, skipping for this cycle");
                }
            }
        }

        info!(stored, skipped, "Scrape cycle completed");
    }

    /// Reconcile one source's candidates into the store
    ///
    /// Each candidate gets an exists-by-link check followed by an insert
    /// when unseen. A store error skips that candidate only. Returns the
    /// (stored, skipped) counts for the source.
    async fn reconcile_source(&self, url: &str, candidates: Vec<NewArticle>) -> (usize, usize) {
        let mut stored = 0;
        let mut skipped = 0;

        for candidate in candidates {
            let exists = match self.db.article_exists_by_link(&candidate.link).await {
                Ok(exists) => exists,
                Err(e) => {
                    error!(
                        url = %url,
                        link = %candidate.link,
                        error = %e,
                        "Failed to check if article exists"
                    );
                    continue;
                }
            };

            if exists {
                debug!(link = %candidate.link, "Article already stored, skipping");
                skipped += 1;
                continue;
            }

            match self.db.insert_article(&candidate).await {
                Ok(id) => {
                    info!(id, title = %candidate.title, "Stored article");
                    stored += 1;
                }
                Err(e) => {
                    error!(
                        url = %url,
                        title = %candidate.title,
                        error = %e,
                        "Failed to store article"
                    );
                }
            }
        }

        (stored, skipped)
    }
}
