//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - The portfolio page
//! GET  /index.html  - Same page, for links copied from a static export
//! GET  /health      - Health check (registered in `app`)
//! GET  /static/*    - Stylesheet and other assets (registered in `app`)
//! *                 - 404 fallback
//! ```

pub mod home;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all page routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/index.html", get(home::home))
        .fallback(not_found)
}

/// The page has no other routes; anything else is a 404.
async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route");
    AppError::NotFound(uri.path().to_string())
}
