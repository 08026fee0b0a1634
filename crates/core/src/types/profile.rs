//! Identity record shown in the header, hero and contact sections.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::link::usable_href;

/// The site owner's identity and outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name (header brand, hero heading, footer).
    pub name: String,
    /// One-line tagline under the name.
    pub tagline: String,
    /// Short biography paragraph.
    pub bio: String,
    /// Resume link. `None` or `"#"` hides every resume action.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Contact address, rendered as a `mailto:` link.
    pub email: Email,
    /// LinkedIn profile URL.
    pub linkedin: String,
    /// GitHub profile URL.
    pub github: String,
}

impl Profile {
    /// Returns the resume URL if it should be rendered.
    #[must_use]
    pub fn resume_href(&self) -> Option<&str> {
        usable_href(self.resume_url.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile(resume_url: Option<&str>) -> Profile {
        Profile {
            name: "Ada".to_string(),
            tagline: "Engineer".to_string(),
            bio: "Builds things.".to_string(),
            resume_url: resume_url.map(String::from),
            email: Email::new("ada@example.com"),
            linkedin: "https://linkedin.example/ada".to_string(),
            github: "https://github.example/ada".to_string(),
        }
    }

    #[test]
    fn test_resume_href_placeholder_is_hidden() {
        assert_eq!(profile(Some("#")).resume_href(), None);
    }

    #[test]
    fn test_resume_href_absent_is_hidden() {
        assert_eq!(profile(None).resume_href(), None);
    }

    #[test]
    fn test_resume_href_present() {
        assert_eq!(profile(Some("https://x")).resume_href(), Some("https://x"));
    }

    #[test]
    fn test_deserialize_without_resume() {
        let yaml = r"
name: Ada
tagline: Engineer
bio: Builds things.
email: ada@example.com
linkedin: https://linkedin.example/ada
github: https://github.example/ada
";
        let parsed: Profile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, profile(None));
    }
}
