//! Vector glyphs used by section headings, buttons and the stat grid.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A small drawable vector glyph.
///
/// Renderers only need the SVG markup, so any type can stand in for an
/// icon: the built-in [`Icon`] set, or a custom glyph supplied by a caller.
pub trait Glyph {
    /// Stable name of the glyph, emitted as a `data-icon` attribute.
    fn name(&self) -> &str;

    /// Inner SVG elements drawn on a 24x24 stroke canvas.
    fn svg_body(&self) -> &str;

    /// Complete inline `<svg>` element with the given CSS class.
    fn to_svg(&self, class: &str) -> String {
        format!(
            r#"<svg class="{class}" data-icon="{name}" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{body}</svg>"#,
            name = self.name(),
            body = self.svg_body(),
        )
    }
}

/// Built-in icon set (Lucide outlines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Github,
    ExternalLink,
    Mail,
    Linkedin,
    Shield,
    Brain,
    Cpu,
    Award,
    Calendar,
}

impl Icon {
    /// Every built-in icon, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Github,
        Self::ExternalLink,
        Self::Mail,
        Self::Linkedin,
        Self::Shield,
        Self::Brain,
        Self::Cpu,
        Self::Award,
        Self::Calendar,
    ];

    /// Returns the kebab-case name used in content files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::ExternalLink => "external-link",
            Self::Mail => "mail",
            Self::Linkedin => "linkedin",
            Self::Shield => "shield",
            Self::Brain => "brain",
            Self::Cpu => "cpu",
            Self::Award => "award",
            Self::Calendar => "calendar",
        }
    }
}

impl Glyph for Icon {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn svg_body(&self) -> &str {
        match self {
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Self::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
            Self::Brain => {
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/><path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/><path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"/>"#
            }
            Self::Cpu => {
                r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#
            }
            Self::Award => {
                r#"<path d="m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526"/><circle cx="12" cy="8" r="6"/>"#
            }
            Self::Calendar => {
                r#"<path d="M8 2v4"/><path d="M16 2v4"/><rect width="18" height="18" x="3" y="4" rx="2"/><path d="M3 10h18"/>"#
            }
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Dot;

    impl Glyph for Dot {
        fn name(&self) -> &str {
            "dot"
        }

        fn svg_body(&self) -> &str {
            r#"<circle cx="12" cy="12" r="1"/>"#
        }
    }

    #[test]
    fn test_to_svg_wraps_body() {
        let svg = Icon::Mail.to_svg("h-4 w-4");
        assert!(svg.starts_with("<svg class=\"h-4 w-4\" data-icon=\"mail\""));
        assert!(svg.contains("<rect width=\"20\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_custom_glyph() {
        let svg = Dot.to_svg("icon");
        assert!(svg.contains("data-icon=\"dot\""));
        assert!(svg.contains("<circle cx=\"12\""));
    }

    #[test]
    fn test_names_match_serde() {
        for icon in Icon::ALL {
            let parsed: Icon = serde_yaml::from_str(icon.as_str()).unwrap();
            assert_eq!(parsed, icon);
        }
    }
}
