//! Content loading.
//!
//! The page renders whatever [`ContentStore`] it is handed. At startup that
//! store comes from a YAML content file when one is configured, or from the
//! built-in content otherwise. The file is read once; nothing reloads it.
//!
//! # File format
//!
//! ```yaml
//! profile:
//!   name: Ada
//!   tagline: Engineer
//!   bio: Builds things.
//!   resume_url: "#"          # placeholder: no resume action
//!   email: ada@example.com
//!   linkedin: https://linkedin.example/ada
//!   github: https://github.example/ada
//! hero:
//!   eyebrow: AI for Cybersecurity
//!   stats:
//!     - { label: Focus, value: DS, icon: brain }
//! about:
//!   summary: I build tools.
//! skills:
//!   - { name: languages, title: Languages, items: [Rust] }
//! projects:
//!   - title: Checker
//!     description: Looks things up.
//!     links: { github: "#" }
//! contact:
//!   heading: Let's talk
//!   blurb: Open to work.
//! ```

use std::path::{Path, PathBuf};

use folio_core::ContentStore;
use thiserror::Error;

/// Errors loading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse content from a YAML string.
///
/// # Errors
///
/// Returns `serde_yaml::Error` if the document does not match the content
/// schema.
pub fn parse_content(yaml: &str) -> Result<ContentStore, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Load content from a YAML file.
///
/// # Errors
///
/// Returns `ContentError` if the file cannot be read or parsed.
pub fn load_content_file(path: &Path) -> Result<ContentStore, ContentError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let store = parse_content(&yaml).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        projects = store.projects().len(),
        skill_categories = store.skills().len(),
        "Loaded content file"
    );

    Ok(store)
}

/// Load content from `path`, or fall back to the built-in content.
///
/// # Errors
///
/// Returns `ContentError` if a path is given and it cannot be loaded.
pub fn load_content(path: Option<&Path>) -> Result<ContentStore, ContentError> {
    match path {
        Some(path) => load_content_file(path),
        None => {
            tracing::info!("No content file configured, using built-in content");
            Ok(ContentStore::default())
        }
    }
}
