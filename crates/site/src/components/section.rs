//! Titled, anchorable page sections.

use askama::Template;
use folio_core::Glyph;

use super::Fragment;
use crate::error::RenderError;

#[derive(Template)]
#[template(path = "components/section.html")]
struct SectionTemplate<'a> {
    id: &'a str,
    title: &'a str,
    icon: Option<String>,
    body: &'a Fragment,
}

/// Render a `<section>` whose `id` is a navigable anchor.
///
/// The heading is `title` verbatim; the icon tile is omitted when `icon` is
/// `None`.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn section(
    id: &str,
    title: &str,
    icon: Option<&dyn Glyph>,
    body: &Fragment,
) -> Result<Fragment, RenderError> {
    SectionTemplate {
        id,
        title,
        icon: icon.map(|glyph| glyph.to_svg("icon")),
        body,
    }
    .render()
    .map(Fragment::from_rendered)
    .map_err(|e| RenderError::new("section", e))
}
