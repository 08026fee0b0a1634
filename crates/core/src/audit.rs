//! Placeholder audit.
//!
//! Rendering never validates content. This audit is a separate, opt-in pass
//! that lists content an author probably meant to fill in: `"#"` links,
//! `example.com` addresses and repeated keys that force positional keys.

use core::fmt;
use std::collections::HashSet;

use crate::store::ContentStore;
use crate::types::is_placeholder;

/// Domains reserved for documentation (RFC 2606).
const EXAMPLE_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Something in the content that looks unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The resume link is `"#"`; resume actions are hidden.
    ResumePlaceholder,
    /// The contact email is empty.
    BlankEmail,
    /// The contact email uses a documentation domain.
    ExampleEmail(String),
    /// The LinkedIn URL still contains the template handle.
    LinkedinPlaceholder(String),
    /// A project's repository link is `"#"`; its Code action is hidden.
    CodePlaceholder { project: String },
    /// A project's demo link is `"#"`; its Demo action still renders.
    DemoPlaceholder { project: String },
    /// Two or more projects share a title.
    DuplicateProjectTitle(String),
    /// A badge list repeats a value.
    DuplicateBadge { list: String, value: String },
}

impl Finding {
    /// `true` for findings that produce a visibly broken page element.
    #[must_use]
    pub const fn is_broken_link(&self) -> bool {
        matches!(self, Self::DemoPlaceholder { .. } | Self::BlankEmail)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResumePlaceholder => write!(f, "profile.resume_url is a placeholder"),
            Self::BlankEmail => write!(f, "profile.email is empty"),
            Self::ExampleEmail(email) => {
                write!(f, "profile.email uses an example domain: {email}")
            }
            Self::LinkedinPlaceholder(url) => {
                write!(f, "profile.linkedin looks like a template URL: {url}")
            }
            Self::CodePlaceholder { project } => {
                write!(f, "project '{project}' has a placeholder github link")
            }
            Self::DemoPlaceholder { project } => write!(
                f,
                "project '{project}' has a placeholder demo link (rendered as a dead Demo button)"
            ),
            Self::DuplicateProjectTitle(title) => {
                write!(f, "project title '{title}' is used more than once")
            }
            Self::DuplicateBadge { list, value } => {
                write!(f, "'{value}' is repeated in {list}")
            }
        }
    }
}

/// Returns the first repeated value in `values`, if any.
fn first_duplicate<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|v| !seen.insert(*v))
}

/// List placeholder and duplicate content, in page order.
#[must_use]
pub fn audit(store: &ContentStore) -> Vec<Finding> {
    let mut findings = Vec::new();
    let profile = store.profile();

    if profile.resume_url.as_deref().is_some_and(is_placeholder) {
        findings.push(Finding::ResumePlaceholder);
    }
    if profile.email.is_blank() {
        findings.push(Finding::BlankEmail);
    } else if EXAMPLE_DOMAINS.contains(&profile.email.domain()) {
        findings.push(Finding::ExampleEmail(profile.email.to_string()));
    }
    if profile.linkedin.contains("your-handle") {
        findings.push(Finding::LinkedinPlaceholder(profile.linkedin.clone()));
    }

    for category in store.skills() {
        if let Some(value) = first_duplicate(category.items.iter().map(String::as_str)) {
            findings.push(Finding::DuplicateBadge {
                list: format!("skills.{}", category.name),
                value: value.to_string(),
            });
        }
    }

    if let Some(title) = first_duplicate(store.projects().iter().map(|p| p.title.as_str())) {
        findings.push(Finding::DuplicateProjectTitle(title.to_string()));
    }

    for project in store.projects() {
        let links = project.links.as_ref();
        if links.and_then(|l| l.github.as_deref()).is_some_and(is_placeholder) {
            findings.push(Finding::CodePlaceholder {
                project: project.title.clone(),
            });
        }
        if links.and_then(|l| l.demo.as_deref()).is_some_and(is_placeholder) {
            findings.push(Finding::DemoPlaceholder {
                project: project.title.clone(),
            });
        }
        if let Some(value) = first_duplicate(project.tech.iter().map(String::as_str)) {
            findings.push(Finding::DuplicateBadge {
                list: format!("project '{}' tech", project.title),
                value: value.to_string(),
            });
        }
    }

    findings
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{Email, Profile, Project};

    #[test]
    fn test_default_content_flags_placeholder_repos() {
        let findings = audit(&ContentStore::default());
        assert_eq!(
            findings,
            vec![
                Finding::CodePlaceholder {
                    project: "Malicious Domain/IP Checker".to_string()
                },
                Finding::CodePlaceholder {
                    project: "Emotion Detection (Yuvakriti)".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_profile_placeholders() {
        let store = ContentStore::default();
        let profile = Profile {
            resume_url: Some("#".to_string()),
            email: Email::new("kunal@example.com"),
            linkedin: "https://www.linkedin.com/in/your-handle".to_string(),
            ..store.profile().clone()
        };
        let findings = audit(&store.with_profile(profile).with_projects(vec![]));
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0], Finding::ResumePlaceholder);
        assert!(matches!(findings[1], Finding::ExampleEmail(_)));
        assert!(matches!(findings[2], Finding::LinkedinPlaceholder(_)));
    }

    #[test]
    fn test_demo_placeholder_is_broken_link() {
        let store = ContentStore::default()
            .with_projects(vec![Project::new("A", "d").with_demo("#")]);
        let findings = audit(&store);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_broken_link());
    }

    #[test]
    fn test_duplicates() {
        let store = ContentStore::default().with_projects(vec![
            Project::new("A", "d").with_tech(["ML", "ML"]),
            Project::new("A", "d"),
        ]);
        let findings = audit(&store);
        assert!(findings.contains(&Finding::DuplicateProjectTitle("A".to_string())));
        assert!(findings.contains(&Finding::DuplicateBadge {
            list: "project 'A' tech".to_string(),
            value: "ML".to_string(),
        }));
    }

    #[test]
    fn test_display() {
        let finding = Finding::CodePlaceholder {
            project: "X".to_string(),
        };
        assert_eq!(finding.to_string(), "project 'X' has a placeholder github link");
    }
}
