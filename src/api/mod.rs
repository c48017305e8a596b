//! REST API server module
//!
//! Provides an OpenAPI documented REST API for browsing stored articles,
//! paging through them, and running scrape cycles on demand.

use crate::{Config, NewsAggregator, Result};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Articles
/// - `GET /api/v1/articles` - List all stored articles
/// - `GET /api/v1/articles/page` - Get one page of articles (`page`, `page_size`)
/// - `POST /api/v1/articles` - Store an article directly
///
/// ## Scrape
/// - `POST /api/v1/scrape` - Run one scrape cycle now
///
/// ## System
/// - `GET /api/v1/health` - Health check
/// - `GET /api/v1/openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(aggregator: Arc<NewsAggregator>, config: Arc<Config>) -> Router {
    let state = AppState::new(aggregator);

    // All API routes live under the /api/v1 prefix
    let api = Router::new()
        // Articles
        .route("/articles", get(routes::list_articles))
        .route("/articles", post(routes::create_article))
        .route("/articles/page", get(routes::page_articles))
        // Scrape
        .route("/scrape", post(routes::trigger_scrape))
        // System
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    let router = Router::new().nest("/api/v1", api);

    // Merge Swagger UI routes if enabled in config (before applying state)
    // Note: the UI is pointed at the /api/v1/openapi.json endpoint we already
    // defined instead of registering its own spec route
    let router = if config.api.swagger_ui {
        router.merge(
            SwaggerUi::new("/swagger-ui")
                .config(utoipa_swagger_ui::Config::from("/api/v1/openapi.json")),
        )
    } else {
        router
    };

    // Add state to all routes
    let router = router.with_state(state);

    // Request/response logging
    let router = router.layer(TraceLayer::new_for_http());

    // Apply CORS middleware if enabled in config (outermost, runs first)
    if config.api.cors_enabled {
        let cors = build_cors_layer(&config.api.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// # Arguments
///
/// * `origins` - List of allowed origins (supports "*" for any origin)
///
/// # Returns
///
/// A configured CorsLayer that allows the specified origins, all methods,
/// and all headers for cross-origin requests.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    // Check if "*" (all origins) is in the list
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        // Allow all origins (default for local development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow specific origins
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// This function creates a TCP listener, binds it to the configured address,
/// and starts serving the API router. It runs until the server is shut down.
///
/// # Arguments
///
/// * `aggregator` - Arc-wrapped NewsAggregator instance to handle API requests
/// * `config` - Arc-wrapped Config containing API configuration
///
/// # Returns
///
/// Returns a Result<()> that completes when the server stops, either due to
/// an error or graceful shutdown.
///
/// # Example
///
/// ```no_run
/// use news_aggregator::{Config, NewsAggregator};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let aggregator = Arc::new(NewsAggregator::new((*config).clone()).await?);
///
/// // Start API server (blocks until shutdown)
/// news_aggregator::api::start_api_server(aggregator, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(aggregator: Arc<NewsAggregator>, config: Arc<Config>) -> Result<()> {
    let bind_address = config.api.bind_address;

    tracing::info!(
        address = %bind_address,
        "Starting API server"
    );

    // Create the router with all routes
    let app = create_router(aggregator, config);

    // Bind TCP listener to the configured address
    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(
        address = %bind_address,
        "API server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
