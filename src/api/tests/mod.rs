use crate::aggregator::{NewsAggregator, test_helpers};
use crate::api::{create_router, start_api_server};
use crate::config::Config;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;


/// Helper to create a test NewsAggregator instance wrapped in Arc
async fn create_test_aggregator() -> (Arc<NewsAggregator>, tempfile::TempDir) {
    let (aggregator, temp_dir) = test_helpers::create_test_aggregator().await;
    (Arc::new(aggregator), temp_dir)
}

/// Helper to create an Arc-wrapped test NewsAggregator from the given config
async fn create_test_aggregator_with(config: Config) -> (Arc<NewsAggregator>, tempfile::TempDir) {
    let (aggregator, temp_dir) = test_helpers::create_test_aggregator_with(config).await;
    (Arc::new(aggregator), temp_dir)
}

/// Helper to build a router over a fresh aggregator, returning both
async fn test_app() -> (Router, Arc<NewsAggregator>, tempfile::TempDir) {
    let (aggregator, temp_dir) = create_test_aggregator().await;
    let config = aggregator.config.clone();
    let app = create_router(aggregator.clone(), config);
    (app, aggregator, temp_dir)
}

#[tokio::test]
async fn test_api_server_spawns() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    // Port 0 = OS assigns a free port
    let mut config = (*aggregator.config).clone();
    config.api.bind_address = "127.0.0.1:0".parse().unwrap();
    let config = Arc::new(config);

    let api_handle = tokio::spawn({
        let aggregator = aggregator.clone();
        let config = config.clone();
        async move { start_api_server(aggregator, config).await }
    });

    // Give it a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    api_handle.abort();
}

#[tokio::test]
async fn test_spawn_api_server_method() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    let api_handle = aggregator.spawn_api_server();

    tokio::time::sleep(Duration::from_millis(100)).await;

    api_handle.abort();
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _aggregator, _temp_dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_enabled() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    let mut config = (*aggregator.config).clone();
    config.api.cors_enabled = true;
    config.api.cors_origins = vec!["*".to_string()];
    let config = Arc::new(config);

    let app = create_router(aggregator, config);

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_server_starts_and_responds_to_health() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    // Bind to a random available port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = (*aggregator.config).clone();
    config.api.bind_address = addr;
    let config = Arc::new(config);

    let server_aggregator = aggregator.clone();
    let server_config = config.clone();
    let server_handle = tokio::spawn(async move {
        let app = create_router(server_aggregator, server_config);
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/api/v1/health", addr);
    let response = client.get(url).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    server_handle.abort();
}

#[tokio::test]
async fn test_openapi_json_endpoint() {
    let (app, _aggregator, _temp_dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body).expect("Response should be valid JSON");

    assert!(json.get("openapi").is_some(), "Should have 'openapi' field");
    assert!(json.get("paths").is_some(), "Should have 'paths' field");

    let openapi_version = json["openapi"].as_str().unwrap();
    assert!(openapi_version.starts_with("3."), "Should be OpenAPI 3.x");

    assert_eq!(json["info"]["title"], "news-aggregator REST API");

    // The documented paths carry the served prefix
    assert!(json["paths"]["/api/v1/articles"]["get"].is_object());
    assert!(json["paths"]["/api/v1/scrape"]["post"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_enabled() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    let mut config = (*aggregator.config).clone();
    config.api.swagger_ui = true;
    let config = Arc::new(config);

    let app = create_router(aggregator, config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Swagger UI should be accessible when enabled"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    assert!(
        body_str.contains("<!DOCTYPE html>") || body_str.contains("<html"),
        "Response should contain HTML"
    );
    assert!(
        body_str.contains("swagger") || body_str.contains("Swagger"),
        "Response should contain Swagger-related content"
    );
}

#[tokio::test]
async fn test_swagger_ui_disabled() {
    let (aggregator, _temp_dir) = create_test_aggregator().await;

    let mut config = (*aggregator.config).clone();
    config.api.swagger_ui = false;
    let config = Arc::new(config);

    let app = create_router(aggregator, config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::NOT_FOUND,
        "Swagger UI should not be accessible when disabled"
    );
}
