//! The immutable content store.
//!
//! A [`ContentStore`] is built once at startup (from code via [`Default`], or
//! deserialized from a content file) and then only read. Renderers borrow it;
//! nothing mutates it after construction.

use serde::{Deserialize, Serialize};

use crate::types::{
    About, Contact, Email, Footer, Hero, Icon, Profile, Project, SkillCategory, Skills, Stat,
};

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    profile: Profile,
    hero: Hero,
    about: About,
    #[serde(default)]
    skills: Skills,
    #[serde(default)]
    projects: Vec<Project>,
    contact: Contact,
    #[serde(default)]
    footer: Footer,
}

impl ContentStore {
    /// Assemble a store from its parts.
    #[must_use]
    pub const fn new(
        profile: Profile,
        hero: Hero,
        about: About,
        skills: Skills,
        projects: Vec<Project>,
        contact: Contact,
        footer: Footer,
    ) -> Self {
        Self {
            profile,
            hero,
            about,
            skills,
            projects,
            contact,
            footer,
        }
    }

    /// Returns a copy of this store with a different profile.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Returns a copy of this store with different skills.
    #[must_use]
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    /// Returns a copy of this store with a different project list.
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub const fn hero(&self) -> &Hero {
        &self.hero
    }

    #[must_use]
    pub const fn about(&self) -> &About {
        &self.about
    }

    #[must_use]
    pub const fn skills(&self) -> &Skills {
        &self.skills
    }

    /// Projects in display order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn contact(&self) -> &Contact {
        &self.contact
    }

    #[must_use]
    pub const fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Skills shown beside the About summary.
    #[must_use]
    pub fn featured_skills(&self) -> Option<&SkillCategory> {
        self.skills.get(&self.about.featured_skills)
    }
}

impl Default for ContentStore {
    /// The shipped portfolio content.
    fn default() -> Self {
        let profile = Profile {
            name: "Kunal Anand".to_string(),
            tagline: "Data Science × Cybersecurity | Competitive Programmer".to_string(),
            bio: "Engineering student building AI-powered tools that solve real problems. \
                  Focused on the DS x Cybersecurity intersection and disciplined problem \
                  solving via competitive programming. Currently in 4th semester \
                  (≈664 days to graduation)."
                .to_string(),
            resume_url: Some(
                "https://drive.google.com/file/d/1IaOs47NJ4v7kY-s1bYJ4toH_Mh-o4s1W/view?usp=drivesdk"
                    .to_string(),
            ),
            email: Email::new("kunal.anand639@gmail.com"),
            linkedin: "https://www.linkedin.com/in/kunal-anand-entertainingwar110/".to_string(),
            github: "https://github.com/kunal639".to_string(),
        };

        let hero = Hero {
            eyebrow: "AI for Cybersecurity".to_string(),
            eyebrow_icon: Icon::Shield,
            stats: vec![
                Stat::new(Icon::Brain, "Focus", "DS × Cybersecurity"),
                Stat::new(Icon::Cpu, "Strength", "End‑to‑end builder"),
                Stat::new(Icon::Award, "Credentials", "Postman API Student Expert"),
                Stat::new(Icon::Calendar, "Semester", "4th (≈664 days left)"),
            ],
        };

        let about = About {
            summary: "I love building practical tools that people can actually use. My current \
                      focus is applying data science and ML to security problems—threat intel \
                      signals, faster triage, and developer‑first tooling. I prefer disciplined \
                      execution over perfect theory."
                .to_string(),
            featured_skills: "domains".to_string(),
        };

        let skills = Skills::new(vec![
            SkillCategory::new(
                "languages",
                "Languages",
                ["Python", "C++", "Java", "JavaScript"],
            ),
            SkillCategory::new(
                "libraries",
                "Libraries & Frameworks",
                [
                    "Pandas",
                    "Tkinter",
                    "Regex",
                    "JSON",
                    "ydata-profiling",
                    "React (basics)",
                    "Framer Motion",
                ],
            ),
            SkillCategory::new(
                "tools",
                "Tools",
                [
                    "Git/GitHub",
                    "Postman (API Fundamentals Student Expert)",
                    "Jupyter",
                    "AbuseIPDB API",
                ],
            ),
            SkillCategory::new(
                "domains",
                "Domains",
                [
                    "Data Science",
                    "Machine Learning",
                    "AI for Cybersecurity",
                    "Competitive Programming",
                ],
            ),
        ]);

        let projects = vec![
            Project::new(
                "Smart Jupyter Launcher with AI Features",
                "Tkinter + CustomTkinter GUI that launches Jupyter, manages project paths via \
                 JSON, checks requirements compatibility, clones GitHub repos, and summarizes \
                 notebooks using a HuggingFace model.",
            )
            .with_subtitle(
                "Desktop app to launch, manage, and summarize notebooks with GitHub integration",
            )
            .with_tech([
                "Python",
                "Tkinter",
                "JSON",
                "subprocess",
                "HuggingFace",
                "ydata-profiling",
            ])
            .with_github("https://github.com/kunal639/Jupyter-Workflow-Automation-v1.0")
            .with_highlights([
                "One-click launch for Jupyter Notebook/Lab from saved workspaces",
                "Requirements checker + version diagnostics",
                "Auto-summarization of notebooks for quick reviews",
            ]),
            Project::new(
                "Jupyter Workflow Automation v2.0 (Ongoing)",
                "Upgrading the launcher with better dependency resolution, compatibility \
                 checks, and user-friendly diagnostics to make it robust for external users.",
            )
            .with_subtitle(
                "Productionizing the launcher with version tracking and robust error handling",
            )
            .with_tech(["Python", "Tkinter", "Pandas", "Regex", "CLI"])
            .with_github("https://github.com/kunal639/Jupyter-Workflow-Automation-v1.0")
            .with_highlights([
                "Version tracking of installed libraries",
                "Improved error reporting and UX",
                "Planned plugin-style modules",
            ]),
            Project::new(
                "Malicious Domain/IP Checker",
                "CLI/Script that queries AbuseIPDB to assess IPs/domains for potential abuse, \
                 enabling rapid triage in security workflows.",
            )
            .with_subtitle("Quick threat lookups using AbuseIPDB to flag risky indicators")
            .with_tech(["Python", "Requests", "AbuseIPDB", "JSON"])
            .with_github("#")
            .with_highlights([
                "Batch and single-lookups",
                "Simple risk signal for fast judgment",
            ]),
            Project::new(
                "Emotion Detection (Yuvakriti)",
                "Built an emotion detection pipeline using classical CV + basic ML; showcased \
                 at the Yuvakriti youth festival (state level).",
            )
            .with_subtitle(
                "Face detection–based emotion classifier; selected for state-level event",
            )
            .with_tech(["OpenCV", "Python", "ML"])
            .with_github("#")
            .with_highlights([
                "Lightweight pipeline, real-time capable",
                "State-level selection at Yuvakriti",
            ]),
        ];

        let contact = Contact {
            heading: "Let’s talk".to_string(),
            blurb: "Open to internships, collaborations, and impactful DS × Cybersecurity work."
                .to_string(),
        };

        let footer = Footer {
            credits: "Built with Rust, askama, and discipline.".to_string(),
        };

        Self::new(profile, hero, about, skills, projects, contact, footer)
    }
}
