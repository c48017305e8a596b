//! REST API server demo
//!
//! Runs the aggregator against two sample listing pages served from
//! `demos/static/`, so the full scrape-store-serve loop can be exercised
//! locally without touching a real news site.
//!
//! After starting, you can:
//! - View Swagger UI at http://localhost:8080/swagger-ui
//! - Trigger a scrape via POST http://localhost:8080/api/v1/scrape
//! - Browse stored articles via GET http://localhost:8080/api/v1/articles

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use news_aggregator::config::{ApiConfig, Config, PersistenceConfig, ScrapeConfig};
use news_aggregator::{NewsAggregator, run_with_shutdown};
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    // Host the sample listing pages the scraper will read
    let static_app = axum::Router::new().nest_service("/", ServeDir::new("demos/static"));
    let static_listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(static_listener, static_app).await {
            eprintln!("static file server failed: {e}");
        }
    });

    // Build configuration
    let config = Config {
        scrape: ScrapeConfig {
            sources: vec![
                "http://127.0.0.1:8081/news.html".to_string(),
                "http://127.0.0.1:8081/news2.html".to_string(),
            ],
            interval: Duration::from_secs(30),
        },
        persistence: PersistenceConfig {
            database_path: "demo-news.db".into(),
        },
        api: ApiConfig {
            bind_address: "127.0.0.1:8080".parse::<SocketAddr>().unwrap(),
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            swagger_ui: true,
        },
    };

    // Create aggregator instance
    let aggregator = Arc::new(NewsAggregator::new(config).await?);

    // First cycle fires immediately, then every 30 seconds
    aggregator.start_scrape_scheduler();
    let api_handle = aggregator.spawn_api_server();

    println!("🚀 Starting news-aggregator REST API server");
    println!("📰 Sample sources: http://127.0.0.1:8081/news.html and /news2.html");
    println!("📖 Swagger UI: http://localhost:8080/swagger-ui");
    println!("📡 API Base: http://localhost:8080/api/v1");
    println!();
    println!("Example commands:");
    println!("  # List stored articles (newest first)");
    println!("  curl http://localhost:8080/api/v1/articles");
    println!();
    println!("  # Page through the store");
    println!("  curl 'http://localhost:8080/api/v1/articles/page?page=1&page_size=5'");
    println!();
    println!("  # Trigger a scrape cycle right now");
    println!("  curl -X POST http://localhost:8080/api/v1/scrape");

    // Run until SIGINT/SIGTERM, then stop the scheduler cleanly
    run_with_shutdown((*aggregator).clone()).await;
    api_handle.abort();

    Ok(())
}
