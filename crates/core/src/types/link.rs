//! Hyperlink helpers.
//!
//! Content authors mark a link they have not filled in yet with the literal
//! `"#"`. Renderers treat that value as "no link" wherever the page would
//! otherwise show a dead button. Content loaded from code should prefer
//! `None` over the placeholder.

/// Placeholder href meaning "no link yet".
pub const PLACEHOLDER_HREF: &str = "#";

/// Returns `true` if `href` is the placeholder sentinel.
#[must_use]
pub fn is_placeholder(href: &str) -> bool {
    href == PLACEHOLDER_HREF
}

/// Returns the href if it is present and not the placeholder.
///
/// ```
/// use folio_core::usable_href;
///
/// assert_eq!(usable_href(Some("https://x")), Some("https://x"));
/// assert_eq!(usable_href(Some("#")), None);
/// assert_eq!(usable_href(None), None);
/// ```
#[must_use]
pub fn usable_href(href: Option<&str>) -> Option<&str> {
    href.filter(|h| !is_placeholder(h))
}
