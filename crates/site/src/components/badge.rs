//! Badge rows (tech stacks, skill lists).

use askama::Template;

use super::{Fragment, display_keys};
use crate::error::RenderError;

struct Badge<'a> {
    key: String,
    label: &'a str,
}

#[derive(Template)]
#[template(path = "components/badge_row.html")]
struct BadgeRowTemplate<'a> {
    badges: Vec<Badge<'a>>,
}

/// Render one badge per item, in order.
///
/// Badges are keyed by their label; a list with repeated labels is keyed by
/// position instead (see [`display_keys`]).
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn badge_row<S: AsRef<str>>(items: &[S]) -> Result<Fragment, RenderError> {
    let badges = display_keys(items)
        .into_iter()
        .zip(items)
        .map(|(key, item)| Badge {
            key,
            label: item.as_ref(),
        })
        .collect();

    BadgeRowTemplate { badges }
        .render()
        .map(Fragment::from_rendered)
        .map_err(|e| RenderError::new("badge_row", e))
}
