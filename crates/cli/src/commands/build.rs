//! Render the portfolio to a static directory.

use std::path::Path;

use folio_site::content::load_content;
use folio_site::export::{ExportSummary, export_site};
use tracing::info;

/// Load content and export the page with its assets into `out`.
///
/// The footer year is taken from the clock at build time.
///
/// # Errors
///
/// Returns an error if the content file cannot be loaded, the page fails to
/// render, or the output cannot be written.
pub fn run(
    content: Option<&Path>,
    out: &Path,
    static_dir: &Path,
) -> Result<ExportSummary, Box<dyn std::error::Error>> {
    let store = load_content(content)?;
    let summary = export_site(&store, folio_site::current_year(), out, static_dir)?;

    info!(
        index = %summary.index_path.display(),
        assets = summary.assets_copied,
        "Build complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content.yaml");
        std::fs::write(
            &content,
            include_str!("../../../site/content/starter.yaml"),
        )
        .unwrap();
        let out = dir.path().join("dist");

        let summary = run(Some(&content), &out, &dir.path().join("missing")).unwrap();

        let html = std::fs::read_to_string(summary.index_path).unwrap();
        assert!(html.contains("Kunal"));
        assert!(!html.contains("data-action=\"view-resume\""));
    }

    #[test]
    fn test_build_missing_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            Some(&dir.path().join("nope.yaml")),
            &dir.path().join("dist"),
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
