//! Copy for the fixed page sections (hero, about, contact, footer).

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// One fact in the hero stat grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

impl Stat {
    #[must_use]
    pub fn new(icon: Icon, label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            icon,
        }
    }
}

/// Hero block shown above the sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Pill above the name, e.g. "AI for Cybersecurity".
    pub eyebrow: String,
    #[serde(default = "default_eyebrow_icon")]
    pub eyebrow_icon: Icon,
    /// Stat grid facts in display order.
    #[serde(default)]
    pub stats: Vec<Stat>,
}

const fn default_eyebrow_icon() -> Icon {
    Icon::Shield
}

/// The About section body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    /// Skill category rendered as badges beside the summary and left out of
    /// the Skills section.
    #[serde(default = "default_featured_skills")]
    pub featured_skills: String,
}

fn default_featured_skills() -> String {
    "domains".to_string()
}

/// The Contact section call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
}

/// Footer copy following the copyright line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub credits: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_about_defaults_featured_skills() {
        let about: About = serde_yaml::from_str("summary: Hi").unwrap();
        assert_eq!(about.featured_skills, "domains");
    }

    #[test]
    fn test_hero_defaults() {
        let hero: Hero = serde_yaml::from_str("eyebrow: Security").unwrap();
        assert_eq!(hero.eyebrow_icon, Icon::Shield);
        assert!(hero.stats.is_empty());
    }

    #[test]
    fn test_stat_icon_by_name() {
        let stat: Stat =
            serde_yaml::from_str("{ label: Focus, value: DS, icon: brain }").unwrap();
        assert_eq!(stat.icon, Icon::Brain);
    }
}
