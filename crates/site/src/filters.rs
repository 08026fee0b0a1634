//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Content hash of `static/css/main.css`, computed by the build script.
const CSS_HASH: &str = env!("CSS_HASH");

/// Returns the relative href of the stylesheet.
///
/// Points at the fingerprinted copy when the build script produced one, so
/// the file can be cached forever. Relative so the same page works served
/// from `/` and opened as an exported `index.html`.
#[must_use]
pub fn stylesheet_href() -> String {
    if CSS_HASH.is_empty() {
        "static/css/main.css".to_string()
    } else {
        format!("static/css/derived/main.{CSS_HASH}.css")
    }
}

/// Returns the stylesheet href.
///
/// Usage in templates: `{{ ""|css_href }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_href(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_href())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_href_is_relative_css() {
        let href = stylesheet_href();
        assert!(href.starts_with("static/css/"));
        assert!(href.ends_with(".css"));
    }
}
