//! Article handlers.

use super::PageQuery;
use crate::api::AppState;
use crate::error::Error;
use crate::types::{Article, NewArticle};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /articles - List all stored articles
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    tag = "articles",
    responses(
        (status = 200, description = "All stored articles, newest first", body = Vec<crate::types::Article>),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn list_articles(State(state): State<AppState>) -> Response {
    match state.aggregator.list_articles().await {
        Ok(articles) => (StatusCode::OK, Json(articles)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list articles");
            e.into_response()
        }
    }
}

/// GET /articles/page - Get one page of stored articles
#[utoipa::path(
    get,
    path = "/api/v1/articles/page",
    tag = "articles",
    params(
        ("page" = u32, Query, description = "1-based page number"),
        ("page_size" = Option<u32>, Query, description = "Articles per page (default 10, clamped to [1, 100])")
    ),
    responses(
        (status = 200, description = "Requested page with remaining-work counters", body = crate::types::ArticlePage),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Page out of range", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn page_articles(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page_size = query.page_size.unwrap_or(10).clamp(1, 100);

    match state.aggregator.page_articles(page_size, query.page).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        // Out-of-range requests are expected client traffic, not server faults
        Err(e @ Error::PageOutOfRange { .. }) => e.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to page articles");
            e.into_response()
        }
    }
}

/// POST /articles - Store an article directly
#[utoipa::path(
    post,
    path = "/api/v1/articles",
    tag = "articles",
    request_body = crate::types::NewArticle,
    responses(
        (status = 201, description = "Stored article with its assigned id", body = crate::types::Article),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    Json(record): Json<NewArticle>,
) -> Response {
    match state.aggregator.create_article(&record).await {
        Ok(id) => {
            let article = Article {
                id,
                title: record.title,
                link: record.link,
                published_at: record.published_at,
            };
            (StatusCode::CREATED, Json(article)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create article");
            e.into_response()
        }
    }
}
