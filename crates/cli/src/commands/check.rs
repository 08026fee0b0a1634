//! Report placeholder content.

use std::path::Path;

use folio_core::{Finding, audit};
use folio_site::content::load_content;
use thiserror::Error;
use tracing::{info, warn};

/// Raised by `--strict` when a placeholder would render as a dead link.
#[derive(Debug, Error)]
#[error("{count} placeholder(s) render as dead links")]
pub struct BrokenLinks {
    pub count: usize,
}

/// Load content and log every finding.
///
/// # Errors
///
/// Returns an error if the content cannot be loaded, or with `strict` set
/// when any finding produces a broken link on the page.
pub fn run(
    content: Option<&Path>,
    strict: bool,
) -> Result<Vec<Finding>, Box<dyn std::error::Error>> {
    let store = load_content(content)?;
    let findings = audit(&store);

    for finding in &findings {
        warn!("{finding}");
    }

    let broken = findings.iter().filter(|f| f.is_broken_link()).count();
    info!(
        findings = findings.len(),
        broken,
        projects = store.projects().len(),
        "Content check complete"
    );

    if strict && broken > 0 {
        return Err(BrokenLinks { count: broken }.into());
    }
    Ok(findings)
}
