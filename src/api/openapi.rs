//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the news-aggregator
//! REST API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the news-aggregator REST API
///
/// This struct is used to generate the OpenAPI specification that describes
/// all available endpoints, request/response types, and API behavior.
///
/// The spec can be accessed via:
/// - `/api/v1/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "news-aggregator REST API",
        version = "0.1.0",
        description = "REST API for browsing scraped news articles and running scrape cycles on demand",
        contact(
            name = "news-aggregator",
            url = "https://github.com/news-aggregator/news-aggregator"
        ),
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Articles
        crate::api::routes::list_articles,
        crate::api::routes::page_articles,
        crate::api::routes::create_article,

        // Scrape
        crate::api::routes::trigger_scrape,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        // Core types from types.rs
        crate::types::Article,
        crate::types::NewArticle,
        crate::types::ArticlePage,

        // API request types from routes
        crate::api::routes::PageQuery,

        // Error types from error.rs
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "articles", description = "Stored articles - List, page through, and create articles"),
        (name = "scrape", description = "Scrape control - Run a scrape cycle over the configured sources"),
        (name = "system", description = "System endpoints - Health check and OpenAPI spec"),
    )
)]
pub struct ApiDoc;
