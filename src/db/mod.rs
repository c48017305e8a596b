//! Database layer for news-aggregator
//!
//! Handles SQLite persistence for scraped articles.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] - Database lifecycle, schema migrations
//! - [`articles`] - Article inserts, dedup lookups, and windowed reads

use crate::types::Article;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::{FromRow, sqlite::SqlitePool};

mod articles;
mod migrations;

/// Article record from database (raw from SQLite)
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    /// Unique database ID
    pub id: i64,
    /// Display title
    pub title: String,
    /// Article link, used as the dedup key
    pub link: String,
    /// Unix timestamp of publication
    pub published_at: i64,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            link: row.link,
            published_at: Utc
                .timestamp_opt(row.published_at, 0)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

/// Article record plus the store-wide total row count
///
/// Produced by windowed queries that select `COUNT(*) OVER ()` alongside
/// each row, so a page and its total come back from a single statement.
#[derive(Debug, Clone, FromRow)]
pub struct WindowedArticleRow {
    /// Unique database ID
    pub id: i64,
    /// Display title
    pub title: String,
    /// Article link, used as the dedup key
    pub link: String,
    /// Unix timestamp of publication
    pub published_at: i64,
    /// Total number of article rows in the store
    pub total_count: i64,
}

impl From<WindowedArticleRow> for Article {
    fn from(row: WindowedArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            link: row.link,
            published_at: Utc
                .timestamp_opt(row.published_at, 0)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

/// Database handle for news-aggregator
pub struct Database {
    pool: SqlitePool,
}
