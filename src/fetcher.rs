//! Source fetching and listing extraction.
//!
//! Fetches configured news listing pages over HTTP and extracts candidate
//! articles from their repeated `article` block structure. Each block is
//! expected to carry a heading link (`h2 a`) and a `time` element with a
//! machine-readable `datetime` attribute.

use crate::error::FetchError;
use crate::types::NewArticle;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use tracing::debug;

/// Fetches news listing pages and extracts candidate articles
#[derive(Clone)]
pub struct SourceFetcher {
    /// HTTP client for fetching listing pages
    http_client: reqwest::Client,
}

impl SourceFetcher {
    /// Create a new source fetcher
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        // Create HTTP client with reasonable timeout (30 seconds)
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("news-aggregator scraper")
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Fetch one listing page and extract its candidate articles
    ///
    /// Issues a single GET with no retry; a transport failure or non-success
    /// status abandons this source for the current cycle. The caller decides
    /// how to handle the error.
    pub async fn fetch_listing(&self, url: &str) -> Result<Vec<NewArticle>> {
        debug!("Fetching listing: {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let candidates = Self::parse_listing(url, &body)?;
        debug!("Extracted {} candidates from {}", candidates.len(), url);
        Ok(candidates)
    }

    /// Extract candidate articles from a listing page body
    ///
    /// Every `article` block yields one candidate. Title and link come from
    /// the block's first `h2 a`; either is empty when the markup lacks it.
    /// The timestamp comes from the first `time` element's `datetime`
    /// attribute in RFC 3339 form; a missing or unparseable value becomes
    /// the Unix epoch rather than failing the whole listing.
    fn parse_listing(url: &str, body: &str) -> Result<Vec<NewArticle>> {
        let document = Html::parse_document(body);

        let block_selector = Self::selector(url, "article")?;
        let heading_selector = Self::selector(url, "h2 a")?;
        let time_selector = Self::selector(url, "time")?;

        let candidates = document
            .select(&block_selector)
            .map(|block| {
                let heading = block.select(&heading_selector).next();
                let title = heading
                    .map(|el| el.text().collect::<String>())
                    .unwrap_or_default();
                let link = heading
                    .and_then(|el| el.value().attr("href"))
                    .unwrap_or_default()
                    .to_string();

                let published_at = block
                    .select(&time_selector)
                    .next()
                    .and_then(|el| el.value().attr("datetime"))
                    .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(DateTime::UNIX_EPOCH);

                NewArticle {
                    title,
                    link,
                    published_at,
                }
            })
            .collect();

        Ok(candidates)
    }

    /// Compile a CSS selector, mapping failure to a parse-setup error
    fn selector(url: &str, css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| {
            Error::Fetch(FetchError::Parse {
                url: url.to_string(),
                reason: format!("invalid selector '{}': {}", css, e),
            })
        })
    }
}
