//! Pure renderers that turn one content record into an HTML [`Fragment`].
//!
//! Every renderer is side-effect free: the same input always yields the same
//! markup. Composition happens by passing rendered fragments into other
//! renderers, ending in [`crate::page`].

pub mod action;
pub mod badge;
pub mod project_card;
pub mod section;

use std::collections::HashSet;
use std::fmt;

pub use action::{Action, ActionStyle, action};
pub use badge::badge_row;
pub use project_card::{project_card, project_cards};
pub use section::section;

/// Rendered, already-escaped HTML.
///
/// Templates embed fragments with `|safe`; only renderers in this module
/// construct them, so the markup inside has been escaped by askama.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub(crate) const fn from_rendered(html: String) -> Self {
        Self(html)
    }

    /// Concatenate fragments in order.
    #[must_use]
    pub fn concat(fragments: impl IntoIterator<Item = Self>) -> Self {
        Self(fragments.into_iter().map(|f| f.0).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keys for a list of repeated elements.
///
/// Each element is keyed by its own value. If any value repeats, every
/// element falls back to its position instead, so keys never collide.
#[must_use]
pub fn display_keys<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    let unique = values.iter().all(|v| seen.insert(v.as_ref()));

    if unique {
        values.iter().map(|v| v.as_ref().to_string()).collect()
    } else {
        (0..values.len()).map(|i| i.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keys_unique_values() {
        assert_eq!(display_keys(&["Python", "Rust"]), vec!["Python", "Rust"]);
    }

    #[test]
    fn test_display_keys_duplicates_fall_back_to_positions() {
        assert_eq!(display_keys(&["A", "B", "A"]), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_display_keys_empty() {
        assert!(display_keys::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_fragment_concat_preserves_order() {
        let joined = Fragment::concat([
            Fragment::from_rendered("<a>".to_string()),
            Fragment::from_rendered("<b>".to_string()),
        ]);
        assert_eq!(joined.as_str(), "<a><b>");
    }
}
