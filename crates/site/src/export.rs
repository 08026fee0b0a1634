//! Static site export.
//!
//! Writes the rendered page to `<out>/index.html` and mirrors the static
//! asset directory to `<out>/static/`, so the output can be opened from disk
//! or uploaded to any static host.

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::ContentStore;
use thiserror::Error;
use tracing::instrument;

use crate::error::RenderError;
use crate::page;

/// Errors writing a static export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub index_path: PathBuf,
    /// Number of asset files copied.
    pub assets_copied: usize,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Render the page and write it, with its assets, into `out_dir`.
///
/// A missing `static_dir` is logged and skipped; the page still renders,
/// just unstyled.
///
/// # Errors
///
/// Returns `ExportError` if rendering fails or any file cannot be written.
#[instrument(skip(store))]
pub fn export_site(
    store: &ContentStore,
    year: i32,
    out_dir: &Path,
    static_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let html = page::render_page(store, year)?;

    fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;
    let index_path = out_dir.join("index.html");
    fs::write(&index_path, html).map_err(io_error(&index_path))?;

    let assets_copied = if static_dir.is_dir() {
        copy_dir(static_dir, &out_dir.join("static"))?
    } else {
        tracing::warn!(
            static_dir = %static_dir.display(),
            "Static directory not found, exporting page without assets"
        );
        0
    };

    tracing::info!(
        index = %index_path.display(),
        assets_copied,
        "Exported site"
    );

    Ok(ExportSummary {
        index_path,
        assets_copied,
    })
}

/// Recursively copy `src` into `dst`, returning the number of files copied.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize, ExportError> {
    fs::create_dir_all(dst).map_err(io_error(dst))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_error(src))? {
        let entry = entry.map_err(io_error(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(io_error(&from))?;
            copied += 1;
        }
    }

    Ok(copied)
}
