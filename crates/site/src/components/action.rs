//! Hyperlink actions (buttons and nav links).

use askama::Template;
use folio_core::Glyph;

use super::Fragment;
use crate::error::RenderError;

/// Visual weight of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    /// Filled button.
    Primary,
    /// Bordered button.
    Outline,
    /// Plain text link (navigation bar).
    Link,
}

impl ActionStyle {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Link => "nav-link",
        }
    }
}

/// A hyperlink rendered as a button or nav link.
pub struct Action<'a> {
    /// Machine-readable name, emitted as `data-action` (e.g. `code`, `demo`).
    pub kind: &'a str,
    pub label: &'a str,
    pub href: &'a str,
    pub icon: Option<&'a dyn Glyph>,
    pub style: ActionStyle,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
}

impl<'a> Action<'a> {
    /// An action opening `href` in a new tab.
    #[must_use]
    pub const fn external(kind: &'a str, label: &'a str, href: &'a str) -> Self {
        Self {
            kind,
            label,
            href,
            icon: None,
            style: ActionStyle::Outline,
            external: true,
        }
    }

    /// An action navigating in place (anchors, `mailto:`).
    #[must_use]
    pub const fn internal(kind: &'a str, label: &'a str, href: &'a str) -> Self {
        Self {
            kind,
            label,
            href,
            icon: None,
            style: ActionStyle::Outline,
            external: false,
        }
    }

    #[must_use]
    pub const fn icon(mut self, icon: &'a dyn Glyph) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Template)]
#[template(path = "components/action.html")]
struct ActionTemplate<'a> {
    kind: &'a str,
    label: &'a str,
    href: &'a str,
    icon: Option<String>,
    class: &'static str,
    external: bool,
}

/// Render an action link.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn action(action: &Action<'_>) -> Result<Fragment, RenderError> {
    ActionTemplate {
        kind: action.kind,
        label: action.label,
        href: action.href,
        icon: action.icon.map(|glyph| glyph.to_svg("icon icon-sm")),
        class: action.style.class(),
        external: action.external,
    }
    .render()
    .map(Fragment::from_rendered)
    .map_err(|e| RenderError::new("action", e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use folio_core::Icon;

    use super::*;

    #[test]
    fn test_external_action_opens_new_tab() {
        let html = action(&Action::external("code", "Code", "https://github.com/a/b"))
            .unwrap()
            .into_string();
        assert!(html.contains(r#"href="https://github.com/a/b""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"data-action="code""#));
        assert!(html.contains("Code"));
    }

    #[test]
    fn test_internal_action_stays_in_tab() {
        let html = action(&Action::internal("email", "Email", "mailto:a@b.c"))
            .unwrap()
            .into_string();
        assert!(html.contains(r#"href="mailto:a@b.c""#));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_icon_and_style() {
        let html = action(
            &Action::external("demo", "Demo", "https://demo.example")
                .icon(&Icon::ExternalLink)
                .style(ActionStyle::Primary),
        )
        .unwrap()
        .into_string();
        assert!(html.contains(r#"data-icon="external-link""#));
        assert!(html.contains("btn-primary"));
    }

    #[test]
    fn test_label_is_escaped() {
        let html = action(&Action::internal("x", "<b>", "#"))
            .unwrap()
            .into_string();
        assert!(html.contains("&#60;b&#62;"));
        assert!(!html.contains("<b>"));
    }
}
