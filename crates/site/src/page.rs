//! Page assembly.
//!
//! Composes the component fragments into the full document in a fixed order:
//! header, hero, About, Skills, Projects, Contact, footer. Everything is
//! mounted inside the single `<div id="root">` of the document.

use askama::Template;
use askama_web::WebTemplate;
use chrono::Datelike;
use folio_core::{ContentStore, Glyph, Icon, Profile};
use tracing::instrument;

use crate::components::{
    Action, ActionStyle, Fragment, action, badge_row, project_cards, section,
};
use crate::error::RenderError;
use crate::filters;

/// Id, heading and icon of one of the four content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Anchor id (`#about`).
    pub id: &'static str,
    /// Heading text.
    pub title: &'static str,
    /// Label in the navigation bar.
    pub nav_label: &'static str,
    pub icon: Icon,
}

pub const ABOUT: SectionSpec = SectionSpec {
    id: "about",
    title: "About Me",
    nav_label: "About",
    icon: Icon::Shield,
};

pub const SKILLS: SectionSpec = SectionSpec {
    id: "skills",
    title: "Skills",
    nav_label: "Skills",
    icon: Icon::Brain,
};

pub const PROJECTS: SectionSpec = SectionSpec {
    id: "projects",
    title: "Projects",
    nav_label: "Projects",
    icon: Icon::Cpu,
};

pub const CONTACT: SectionSpec = SectionSpec {
    id: "contact",
    title: "Contact",
    nav_label: "Contact",
    icon: Icon::Mail,
};

/// The content sections in page order.
pub const SECTIONS: [SectionSpec; 4] = [ABOUT, SKILLS, PROJECTS, CONTACT];

/// Anchor id of the hero block.
pub const HOME_ID: &str = "home";

/// Returns the current calendar year in the server's local time zone.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

// =============================================================================
// Templates
// =============================================================================

/// The full document.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub name: String,
    pub tagline: String,
    pub nav: Fragment,
    pub header_actions: Fragment,
    pub hero: Fragment,
    pub sections: Fragment,
    pub year: i32,
    pub credits: String,
}

struct StatView {
    icon: String,
    label: String,
    value: String,
}

#[derive(Template)]
#[template(path = "page/hero.html")]
struct HeroTemplate<'a> {
    id: &'a str,
    eyebrow_icon: String,
    eyebrow: &'a str,
    name: &'a str,
    tagline: &'a str,
    bio: &'a str,
    actions: Fragment,
    stats: Vec<StatView>,
}

#[derive(Template)]
#[template(path = "page/about.html")]
struct AboutTemplate<'a> {
    summary: &'a str,
    featured: Fragment,
}

struct SkillCardView<'a> {
    title: &'a str,
    badges: Fragment,
}

#[derive(Template)]
#[template(path = "page/skills.html")]
struct SkillsTemplate<'a> {
    cards: Vec<SkillCardView<'a>>,
}

#[derive(Template)]
#[template(path = "page/projects.html")]
struct ProjectsTemplate {
    cards: Fragment,
}

#[derive(Template)]
#[template(path = "page/contact.html")]
struct ContactTemplate<'a> {
    heading: &'a str,
    blurb: &'a str,
    actions: Fragment,
}

fn render_with(template: &impl Template, name: &'static str) -> Result<Fragment, RenderError> {
    template
        .render()
        .map(Fragment::from_rendered)
        .map_err(|e| RenderError::new(name, e))
}

// =============================================================================
// Assembly
// =============================================================================

/// Navigation links: one per section, then the resume link if there is one.
fn nav(profile: &Profile) -> Result<Fragment, RenderError> {
    let targets: Vec<(String, String)> = SECTIONS
        .iter()
        .map(|s| (format!("nav-{}", s.id), format!("#{}", s.id)))
        .collect();

    let mut links = SECTIONS
        .iter()
        .zip(&targets)
        .map(|(spec, (kind, href))| {
            action(&Action::internal(kind, spec.nav_label, href).style(ActionStyle::Link))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(resume) = profile.resume_href() {
        links.push(action(
            &Action::external("resume", "Resume", resume).style(ActionStyle::Link),
        )?);
    }

    Ok(Fragment::concat(links))
}

fn header_actions(profile: &Profile) -> Result<Fragment, RenderError> {
    action(&Action::external("github", "GitHub", &profile.github).icon(&Icon::Github))
}

fn hero(store: &ContentStore) -> Result<Fragment, RenderError> {
    let profile = store.profile();
    let hero = store.hero();
    let mailto = profile.email.mailto_href();

    let mut actions = Vec::with_capacity(3);
    if let Some(resume) = profile.resume_href() {
        actions.push(action(
            &Action::external("view-resume", "View Resume", resume)
                .icon(&Icon::Award)
                .style(ActionStyle::Primary),
        )?);
    }
    actions.push(action(
        &Action::internal("contact", "Contact", &mailto).icon(&Icon::Mail),
    )?);
    actions.push(action(
        &Action::external("linkedin", "LinkedIn", &profile.linkedin).icon(&Icon::Linkedin),
    )?);

    let stats = hero
        .stats
        .iter()
        .map(|stat| StatView {
            icon: stat.icon.to_svg("icon icon-sm"),
            label: stat.label.clone(),
            value: stat.value.clone(),
        })
        .collect();

    render_with(
        &HeroTemplate {
            id: HOME_ID,
            eyebrow_icon: hero.eyebrow_icon.to_svg("icon icon-sm"),
            eyebrow: &hero.eyebrow,
            name: &profile.name,
            tagline: &profile.tagline,
            bio: &profile.bio,
            actions: Fragment::concat(actions),
            stats,
        },
        "hero",
    )
}

fn about(store: &ContentStore) -> Result<Fragment, RenderError> {
    let featured = match store.featured_skills() {
        Some(category) => badge_row(&category.items)?,
        None => Fragment::default(),
    };

    render_with(
        &AboutTemplate {
            summary: &store.about().summary,
            featured,
        },
        "about",
    )
}

fn skills(store: &ContentStore) -> Result<Fragment, RenderError> {
    let cards = store
        .skills()
        .iter_except(&store.about().featured_skills)
        .map(|category| -> Result<SkillCardView<'_>, RenderError> {
            Ok(SkillCardView {
                title: &category.title,
                badges: badge_row(&category.items)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    render_with(&SkillsTemplate { cards }, "skills")
}

fn projects(store: &ContentStore) -> Result<Fragment, RenderError> {
    render_with(
        &ProjectsTemplate {
            cards: project_cards(store.projects())?,
        },
        "projects",
    )
}

fn contact(store: &ContentStore) -> Result<Fragment, RenderError> {
    let profile = store.profile();
    let mailto = profile.email.mailto_href();

    let actions = Fragment::concat([
        action(&Action::internal("email", "Email", &mailto).icon(&Icon::Mail))?,
        action(&Action::external("linkedin", "LinkedIn", &profile.linkedin).icon(&Icon::Linkedin))?,
        action(
            &Action::external("github", "GitHub", &profile.github)
                .icon(&Icon::Github)
                .style(ActionStyle::Primary),
        )?,
    ]);

    render_with(
        &ContactTemplate {
            heading: &store.contact().heading,
            blurb: &store.contact().blurb,
            actions,
        },
        "contact",
    )
}

fn titled(spec: SectionSpec, body: &Fragment) -> Result<Fragment, RenderError> {
    section(spec.id, spec.title, Some(&spec.icon as &dyn Glyph), body)
}

/// Compose the page for `store`, stamping `year` into the footer.
///
/// # Errors
///
/// Returns `RenderError` if any fragment fails to render.
#[instrument(skip(store), fields(projects = store.projects().len()))]
pub fn assemble(store: &ContentStore, year: i32) -> Result<PageTemplate, RenderError> {
    let profile = store.profile();

    let sections = Fragment::concat([
        titled(ABOUT, &about(store)?)?,
        titled(SKILLS, &skills(store)?)?,
        titled(PROJECTS, &projects(store)?)?,
        titled(CONTACT, &contact(store)?)?,
    ]);

    Ok(PageTemplate {
        name: profile.name.clone(),
        tagline: profile.tagline.clone(),
        nav: nav(profile)?,
        header_actions: header_actions(profile)?,
        hero: hero(store)?,
        sections,
        year,
        credits: store.footer().credits.clone(),
    })
}

/// Render the complete HTML document.
///
/// # Errors
///
/// Returns `RenderError` if any fragment or the document fails to render.
pub fn render_page(store: &ContentStore, year: i32) -> Result<String, RenderError> {
    assemble(store, year)?
        .render()
        .map_err(|e| RenderError::new("page", e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use folio_core::{Email, Project};

    use super::*;

    fn page(store: &ContentStore) -> String {
        render_page(store, 2026).unwrap()
    }

    fn with_resume(resume_url: Option<&str>) -> ContentStore {
        let store = ContentStore::default();
        let profile = Profile {
            resume_url: resume_url.map(String::from),
            ..store.profile().clone()
        };
        store.with_profile(profile)
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = page(&ContentStore::default());
        let positions: Vec<usize> = SECTIONS
            .iter()
            .map(|s| html.find(&format!(r#"<section id="{}""#, s.id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.find(r#"id="home""#).unwrap() < positions[0]);
    }

    #[test]
    fn test_section_headings_match_titles() {
        let html = page(&ContentStore::default());
        for spec in SECTIONS {
            assert!(html.contains(&format!("<h2>{}</h2>", spec.title)));
        }
    }

    #[test]
    fn test_resume_placeholder_hides_resume_actions() {
        let html = page(&with_resume(Some("#")));
        assert!(!html.contains(r#"data-action="resume""#));
        assert!(!html.contains(r#"data-action="view-resume""#));
    }

    #[test]
    fn test_resume_present_renders_in_nav_and_hero() {
        let html = page(&with_resume(Some("https://x")));
        assert!(html.contains(r#"href="https://x" data-action="resume""#));
        assert!(html.contains(r#"href="https://x" data-action="view-resume""#));
    }

    #[test]
    fn test_mailto_links() {
        let store = ContentStore::default();
        let profile = Profile {
            email: Email::new("me@example.com"),
            ..store.profile().clone()
        };
        let html = page(&store.with_profile(profile));
        assert_eq!(html.matches(r#"href="mailto:me@example.com""#).count(), 2);
    }

    #[test]
    fn test_footer_uses_given_year() {
        let html = page(&ContentStore::default());
        assert!(html.contains("© 2026 Kunal Anand."));
    }

    #[test]
    fn test_current_year_is_local() {
        let before = chrono::Local::now().year();
        let year = current_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }

    #[test]
    fn test_stat_grid_has_four_facts() {
        let html = page(&ContentStore::default());
        assert_eq!(html.matches(r#"class="stat""#).count(), 4);
        assert!(html.contains("Postman API Student Expert"));
    }

    #[test]
    fn test_featured_skills_only_in_about() {
        let html = page(&ContentStore::default());
        let skills_start = html.find(r#"<section id="skills""#).unwrap();
        let about_start = html.find(r#"<section id="about""#).unwrap();
        let domain = html.find(">Competitive Programming</span>").unwrap();
        assert!(about_start < domain && domain < skills_start);
        assert_eq!(html.matches(">Competitive Programming</span>").count(), 1);
        assert!(html.contains("<h3>Libraries &#38; Frameworks</h3>"));
    }

    #[test]
    fn test_empty_projects_section_still_renders() {
        let html = page(&ContentStore::default().with_projects(vec![]));
        assert!(html.contains(r#"<section id="projects""#));
        assert!(html.contains("<h2>Projects</h2>"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_duplicate_titles_render_two_cards() {
        let projects = vec![Project::new("A", "one"), Project::new("A", "two")];
        let html = page(&ContentStore::default().with_projects(projects));
        assert_eq!(html.matches("<article").count(), 2);
    }

    #[test]
    fn test_single_mount_point() {
        let html = page(&ContentStore::default());
        assert_eq!(html.matches(r#"id="root""#).count(), 1);
    }
}
