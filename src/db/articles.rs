//! Article storage: inserts, dedup lookups, and windowed reads.

use crate::error::DatabaseError;
use crate::types::{Article, NewArticle};
use crate::{Error, Result};

use super::{ArticleRow, Database, WindowedArticleRow};

impl Database {
    /// Check whether an article with this link is already stored
    pub async fn article_exists_by_link(&self, link: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM articles WHERE link = ?
            "#,
        )
        .bind(link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to check if article exists: {}",
                e
            )))
        })?;

        Ok(count > 0)
    }

    /// Insert a single article, returning its assigned ID
    pub async fn insert_article(&self, article: &NewArticle) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, link, published_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&article.title)
        .bind(&article.link)
        .bind(article.published_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to insert article: {}",
                e
            )))
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Get all stored articles, newest first
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, link, published_at
            FROM articles
            ORDER BY published_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to list articles: {}",
                e
            )))
        })?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    /// Get one window of articles, newest first, plus the store-wide total
    ///
    /// The total rides along on every row via `COUNT(*) OVER ()`, so the
    /// window and its total reflect the same statement. A window past the
    /// end of the data comes back empty with a total of zero.
    pub async fn window_articles(&self, limit: i64, offset: i64) -> Result<(Vec<Article>, i64)> {
        let rows = sqlx::query_as::<_, WindowedArticleRow>(
            r#"
            SELECT id, title, link, published_at, COUNT(*) OVER () AS total_count
            FROM articles
            ORDER BY published_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to window articles: {}",
                e
            )))
        })?;

        let total = rows.first().map_or(0, |row| row.total_count);
        Ok((rows.into_iter().map(Article::from).collect(), total))
    }
}
