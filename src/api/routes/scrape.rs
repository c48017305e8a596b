//! Scrape control handlers.

use crate::api::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// POST /scrape - Run one scrape cycle now
#[utoipa::path(
    post,
    path = "/api/v1/scrape",
    tag = "scrape",
    responses(
        (status = 200, description = "Cycle completed over all configured sources; per-source failures are logged, not surfaced")
    )
)]
pub async fn trigger_scrape(State(state): State<AppState>) -> impl IntoResponse {
    let sources = state.aggregator.run_scrape_cycle().await;

    (
        StatusCode::OK,
        Json(json!({"status": "completed", "sources": sources})),
    )
}
