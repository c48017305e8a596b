//! # news-aggregator
//!
//! Backend library for periodic news-listing scraping with duplicate-free storage.
//!
//! ## Design Philosophy
//!
//! news-aggregator is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works out of the box with zero configuration
//! - **Duplicate-free** - Every candidate link is checked against the store before insert
//! - **Fault-contained** - A failing source never aborts a scrape cycle
//!
//! ## Quick Start
//!
//! ```no_run
//! use news_aggregator::{Config, NewsAggregator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.scrape.sources = vec!["https://news.example.com/latest".to_string()];
//!
//!     let aggregator = NewsAggregator::new(config).await?;
//!
//!     // Scrape all configured sources on a fixed period in the background
//!     aggregator.start_scrape_scheduler();
//!
//!     let articles = aggregator.list_articles().await?;
//!     println!("{} articles stored", articles.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Core aggregator implementation (decomposed into focused submodules)
pub mod aggregator;
/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// HTML listing fetching and parsing
pub mod fetcher;
/// Fetch-and-dedup ingest coordination
pub mod ingest;
/// Periodic scrape scheduling
pub mod scheduler;
/// Core types
pub mod types;

// Re-export commonly used types
pub use aggregator::NewsAggregator;
pub use config::Config;
pub use db::Database;
pub use error::{ApiError, DatabaseError, Error, ErrorDetail, FetchError, Result, ToHttpStatus};
pub use fetcher::SourceFetcher;
pub use ingest::Ingestor;
pub use scheduler::ScrapeScheduler;
pub use types::{Article, ArticlePage, NewArticle};

/// Helper function to run the aggregator with graceful signal handling.
///
/// Waits for a termination signal and then calls the aggregator's `shutdown()` method.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use news_aggregator::{Config, NewsAggregator, run_with_shutdown};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::default();
///     let aggregator = NewsAggregator::new(config).await?;
///     aggregator.start_scrape_scheduler();
///
///     // Run with automatic signal handling
///     run_with_shutdown(aggregator).await;
///
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(aggregator: NewsAggregator) {
    wait_for_signal().await;
    aggregator.shutdown().await;
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Set up signal handlers - these may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
