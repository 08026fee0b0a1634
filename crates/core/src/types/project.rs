//! Showcased projects.

use serde::{Deserialize, Serialize};

use super::link::usable_href;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Outbound links for a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Source repository. `"#"` means "no public repo".
    #[serde(default)]
    pub github: Option<String>,
    /// Live demo. Rendered whenever present.
    #[serde(default)]
    pub demo: Option<String>,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading; also the card's display key.
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    /// Technologies, rendered as badges in this order.
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: Option<ProjectLinks>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl Project {
    /// Create a project with only the required fields set.
    #[must_use]
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            description: description.to_string(),
            tech: Vec::new(),
            links: None,
            highlights: None,
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Set the tech badges.
    #[must_use]
    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }

    /// Set the repository link.
    #[must_use]
    pub fn with_github(mut self, url: &str) -> Self {
        self.links.get_or_insert_with(ProjectLinks::default).github = Some(url.to_string());
        self
    }

    /// Set the demo link.
    #[must_use]
    pub fn with_demo(mut self, url: &str) -> Self {
        self.links.get_or_insert_with(ProjectLinks::default).demo = Some(url.to_string());
        self
    }

    /// Set the highlight bullets.
    #[must_use]
    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = Some(highlights.into_iter().map(Into::into).collect());
        self
    }

    /// Subtitle to render, `None` when missing or empty.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        non_empty(self.subtitle.as_deref())
    }

    /// Repository link to render as a "Code" action.
    ///
    /// Absent when the link is missing, empty or the `"#"` placeholder.
    #[must_use]
    pub fn code_href(&self) -> Option<&str> {
        usable_href(non_empty(
            self.links.as_ref().and_then(|l| l.github.as_deref()),
        ))
    }

    /// Demo link to render as a "Demo" action.
    ///
    /// Any non-empty link gates the action: unlike [`Project::code_href`] the
    /// `"#"` placeholder is not filtered.
    #[must_use]
    pub fn demo_href(&self) -> Option<&str> {
        non_empty(self.links.as_ref().and_then(|l| l.demo.as_deref()))
    }

    /// Highlight bullets, empty when absent.
    #[must_use]
    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_code_href_filters_placeholder() {
        let project = Project::new("A", "d").with_github("#");
        assert_eq!(project.code_href(), None);

        let project = Project::new("A", "d").with_github("https://github.com/a/b");
        assert_eq!(project.code_href(), Some("https://github.com/a/b"));

        assert_eq!(Project::new("A", "d").code_href(), None);
    }

    #[test]
    fn test_demo_href_keeps_placeholder() {
        let project = Project::new("A", "d").with_demo("#");
        assert_eq!(project.demo_href(), Some("#"));
        assert_eq!(Project::new("A", "d").demo_href(), None);
    }

    #[test]
    fn test_empty_links_are_absent() {
        let project = Project::new("A", "d").with_github("").with_demo("");
        assert_eq!(project.code_href(), None);
        assert_eq!(project.demo_href(), None);
    }

    #[test]
    fn test_empty_subtitle_is_absent() {
        assert_eq!(Project::new("A", "d").with_subtitle("").subtitle(), None);
        assert_eq!(Project::new("A", "d").subtitle(), None);
        assert_eq!(
            Project::new("A", "d").with_subtitle("Tools").subtitle(),
            Some("Tools")
        );
    }

    #[test]
    fn test_highlights_default_empty() {
        assert!(Project::new("A", "d").highlights().is_empty());
        let project = Project::new("A", "d").with_highlights(["one", "two"]);
        assert_eq!(project.highlights(), ["one", "two"]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let yaml = r"
title: Checker
description: Looks things up.
links:
  github: '#'
";
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert!(project.tech.is_empty());
        assert!(project.subtitle.is_none());
        assert_eq!(project.links.unwrap().github.as_deref(), Some("#"));
    }
}
