//! Skill categories.

use serde::{Deserialize, Serialize};

/// One named group of skills, e.g. `languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Lookup key (`languages`, `libraries`, `tools`, `domains`, ...).
    pub name: String,
    /// Display heading, e.g. "Libraries & Frameworks".
    pub title: String,
    /// Skill names in display order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillCategory {
    /// Create a category from a key, heading and items.
    #[must_use]
    pub fn new<I, S>(name: &str, title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping from category key to skills.
///
/// Insertion order is display order. Keys are not checked for uniqueness;
/// [`Skills::get`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(Vec<SkillCategory>);

impl Skills {
    /// Create from categories in display order.
    #[must_use]
    pub const fn new(categories: Vec<SkillCategory>) -> Self {
        Self(categories)
    }

    /// Look up a category by key.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SkillCategory> {
        self.0.iter().find(|c| c.name == name)
    }

    /// Iterate categories in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, SkillCategory> {
        self.0.iter()
    }

    /// Iterate categories, skipping the one with key `name`.
    pub fn iter_except<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SkillCategory> {
        self.0.iter().filter(move |c| c.name != name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Skills {
    type Item = &'a SkillCategory;
    type IntoIter = std::slice::Iter<'a, SkillCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Skills {
        Skills::new(vec![
            SkillCategory::new("languages", "Languages", ["Rust", "Python"]),
            SkillCategory::new("tools", "Tools", ["Git"]),
            SkillCategory::new("domains", "Domains", ["Security"]),
        ])
    }

    #[test]
    fn test_get_by_name() {
        let skills = sample();
        assert_eq!(skills.get("tools").unwrap().items, vec!["Git"]);
        assert!(skills.get("missing").is_none());
    }

    #[test]
    fn test_iter_preserves_order() {
        let names: Vec<_> = sample().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["languages", "tools", "domains"]);
    }

    #[test]
    fn test_iter_except() {
        let skills = sample();
        let names: Vec<_> = skills.iter_except("domains").map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["languages", "tools"]);
    }

    #[test]
    fn test_deserialize_sequence_keeps_order() {
        let yaml = r"
- name: tools
  title: Tools
  items: [Git, Jupyter]
- name: languages
  title: Languages
";
        let skills: Skills = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills.iter().next().unwrap().name, "tools");
        assert!(skills.get("languages").unwrap().items.is_empty());
    }
}
