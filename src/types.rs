//! Core types for articles and paginated query results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored news article
///
/// Records are created once, during a scrape cycle or via the create
/// endpoint, and are never updated or deleted afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    /// Unique identifier assigned by the store on insert
    pub id: i64,

    /// Display title (may be empty if the source markup was malformed)
    pub title: String,

    /// Link to the full article; doubles as the dedup key
    pub link: String,

    /// Publication timestamp; Unix epoch when the source carried none
    pub published_at: DateTime<Utc>,
}

/// A candidate article parsed from a source listing, not yet stored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewArticle {
    /// Display title extracted from the listing block
    pub title: String,

    /// Link extracted from the listing block (empty if absent)
    pub link: String,

    /// Publication timestamp; Unix epoch if absent or unparseable
    pub published_at: DateTime<Utc>,
}

/// One window over the stored articles, newest first, with derived counts
///
/// Recomputed from store state on every query; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticlePage {
    /// The records in this window (up to the requested page size)
    pub articles: Vec<Article>,

    /// Records remaining after this window
    pub remaining_count: u64,

    /// Full or partial pages remaining after this window
    pub remaining_pages: u32,

    /// The 1-based page number served
    pub current_page: u32,

    /// Total page count for the full record set
    pub total_pages: u32,
}
