//! Article read paths, pagination, and direct creation.

use crate::error::{Error, Result};
use crate::types::{Article, ArticlePage, NewArticle};

use super::NewsAggregator;

impl NewsAggregator {
    /// Get all stored articles, newest first
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        self.db.list_articles().await
    }

    /// Get one page of stored articles, newest first
    ///
    /// Pages are 1-based. The request is rejected with [`Error::PageOutOfRange`]
    /// when `page_number` exceeds the total page count, including the empty-store
    /// case where the total page count is zero. `page_size` and `page_number`
    /// must both be at least 1.
    pub async fn page_articles(&self, page_size: u32, page_number: u32) -> Result<ArticlePage> {
        if page_size == 0 || page_number == 0 {
            return Err(Error::PageOutOfRange { page: page_number });
        }

        let offset = u64::from(page_number - 1) * u64::from(page_size);
        // SQLite offsets are i64; a request this far past the end can only be out of range
        let offset = i64::try_from(offset).map_err(|_| Error::PageOutOfRange {
            page: page_number,
        })?;

        let (articles, total_count) = self
            .db
            .window_articles(i64::from(page_size), offset)
            .await?;

        let total_count = u64::try_from(total_count).unwrap_or(0);
        let page_size = u64::from(page_size);
        let total_pages = ((total_count + page_size - 1) / page_size) as u32;
        if page_number > total_pages {
            return Err(Error::PageOutOfRange { page: page_number });
        }

        let consumed = offset as u64 + articles.len() as u64;
        let remaining_count = total_count.saturating_sub(consumed);
        let remaining_pages = ((remaining_count + page_size - 1) / page_size) as u32;

        Ok(ArticlePage {
            articles,
            remaining_count,
            remaining_pages,
            current_page: page_number,
            total_pages,
        })
    }

    /// Insert an article directly
    ///
    /// Bypasses the scrape-cycle dedup check; callers get a row even when the
    /// link already exists. Returns the assigned id.
    pub async fn create_article(&self, article: &NewArticle) -> Result<i64> {
        self.db.insert_article(article).await
    }

    /// Run one scrape cycle over the configured sources right now
    ///
    /// Returns the number of sources that were scraped. Fetch and store
    /// failures are contained per source and logged by the ingest path.
    pub async fn run_scrape_cycle(&self) -> usize {
        let sources = &self.config.scrape.sources;
        self.ingestor.run_cycle(sources).await;
        sources.len()
    }
}
