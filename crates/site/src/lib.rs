//! Folio site library.
//!
//! Renders a [`folio_core::ContentStore`] into a single HTML page and serves
//! it over HTTP or writes it to disk as a static site.
//!
//! # Pipeline
//!
//! ```text
//! ContentStore -> components (fragments) -> page (document) -> HTTP / index.html
//! ```
//!
//! - [`components`] - pure renderers: section, project card, badge row, action
//! - [`page`] - assembles the fragments into the full document
//! - [`routes`] - axum handlers serving the page
//! - [`export`] - static-site output for the CLI

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod filters;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use page::{PageTemplate, current_year, render_page};
pub use state::AppState;

/// Build the site router: page routes, health check, static assets and the
/// security headers applied to every response.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(axum_middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
