//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`articles`] - Article listing, pagination, and direct creation
//! - [`scrape`] - On-demand scrape cycles
//! - [`system`] - Health and OpenAPI

use serde::{Deserialize, Serialize};

mod articles;
mod scrape;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use articles::*;
pub use scrape::*;
pub use system::*;

// ============================================================================
// Query/Request Types (shared across handlers)
// ============================================================================

/// Query parameters for GET /articles/page
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    /// Articles per page (default: 10, clamped to [1, 100])
    pub page_size: Option<u32>,
}
