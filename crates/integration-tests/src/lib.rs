//! Integration tests for Folio.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p folio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `page_rendering` - Full-document properties of the rendered page
//! - `site_routes` - The axum router driven in-process, no socket
//! - `content_files` - Shipped content files parse and render

use std::path::PathBuf;

use folio_core::ContentStore;
use folio_site::AppState;
use folio_site::config::SiteConfig;

/// Path to the starter content shipped with the site crate.
#[must_use]
pub fn starter_content_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site/content/starter.yaml")
}

/// Path to the site crate's static assets.
#[must_use]
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site/static")
}

/// Router state over `store`, serving assets from the real static directory.
#[must_use]
pub fn test_state(store: ContentStore) -> AppState {
    let config = SiteConfig {
        static_dir: static_dir(),
        ..SiteConfig::default()
    };
    AppState::new(config, store)
}
