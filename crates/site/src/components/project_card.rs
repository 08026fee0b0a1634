//! Project cards.
//!
//! Link gating follows the content conventions:
//! - "Code" renders only for a non-empty, non-placeholder repository link.
//! - "Demo" renders whenever a non-empty demo link is present, even `"#"`.

use askama::Template;
use folio_core::{Icon, Project};

use super::{Action, ActionStyle, Fragment, action, badge_row, display_keys};
use crate::error::RenderError;

#[derive(Template)]
#[template(path = "components/project_card.html")]
struct ProjectCardTemplate<'a> {
    key: &'a str,
    title: &'a str,
    subtitle: Option<&'a str>,
    description: &'a str,
    highlights: &'a [String],
    code: Option<Fragment>,
    demo: Option<Fragment>,
    tech: Fragment,
}

/// Render one project card with the given display key.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn project_card(project: &Project, key: &str) -> Result<Fragment, RenderError> {
    let code = project
        .code_href()
        .map(|href| {
            action(
                &Action::external("code", "Code", href)
                    .icon(&Icon::Github)
                    .style(ActionStyle::Outline),
            )
        })
        .transpose()?;

    let demo = project
        .demo_href()
        .map(|href| {
            action(
                &Action::external("demo", "Demo", href)
                    .icon(&Icon::ExternalLink)
                    .style(ActionStyle::Primary),
            )
        })
        .transpose()?;

    ProjectCardTemplate {
        key,
        title: &project.title,
        subtitle: project.subtitle(),
        description: &project.description,
        highlights: project.highlights(),
        code,
        demo,
        tech: badge_row(&project.tech)?,
    }
    .render()
    .map(Fragment::from_rendered)
    .map_err(|e| RenderError::new("project_card", e))
}

/// Render every project in order, keyed by title (positional if titles repeat).
///
/// # Errors
///
/// Returns `RenderError` if any card fails to render.
pub fn project_cards(projects: &[Project]) -> Result<Fragment, RenderError> {
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    let keys = display_keys(&titles);

    let cards = projects
        .iter()
        .zip(&keys)
        .map(|(project, key)| project_card(project, key))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Fragment::concat(cards))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(project: &Project) -> String {
        project_card(project, &project.title).unwrap().into_string()
    }

    fn base() -> Project {
        Project::new("Checker", "Looks up indicators.").with_tech(["Python", "JSON"])
    }

    #[test]
    fn test_code_action_for_real_repo() {
        let html = render(&base().with_github("https://github.com/a/checker"));
        assert_eq!(html.matches(r#"data-action="code""#).count(), 1);
        assert!(html.contains(r#"href="https://github.com/a/checker""#));
    }

    #[test]
    fn test_no_code_action_for_placeholder_repo() {
        let html = render(&base().with_github("#"));
        assert!(!html.contains(r#"data-action="code""#));
    }

    #[test]
    fn test_no_code_action_without_links() {
        let html = render(&base());
        assert!(!html.contains(r#"data-action="code""#));
        assert!(!html.contains(r#"data-action="demo""#));
    }

    #[test]
    fn test_demo_action_renders_even_for_placeholder() {
        let html = render(&base().with_demo("#"));
        assert_eq!(html.matches(r##"data-action="demo""##).count(), 1);
        assert!(html.contains(r##"href="#" data-action="demo""##));
    }

    #[test]
    fn test_subtitle_omitted_when_absent() {
        let html = render(&base());
        assert!(!html.contains("project-subtitle"));

        let html = render(&base().with_subtitle("A CLI"));
        assert!(html.contains(r#"<p class="project-subtitle">A CLI</p>"#));
    }

    #[test]
    fn test_empty_subtitle_renders_no_container() {
        let html = render(&base().with_subtitle(""));
        assert!(!html.contains("project-subtitle"));
    }

    #[test]
    fn test_empty_links_render_no_actions() {
        let html = render(&base().with_github("").with_demo(""));
        assert!(!html.contains(r#"data-action="code""#));
        assert!(!html.contains(r#"data-action="demo""#));
        assert!(!html.contains(r#"href="""#));
    }

    #[test]
    fn test_highlights_list_only_when_non_empty() {
        assert!(!render(&base()).contains("<ul"));
        assert!(!render(&base().with_highlights(Vec::<String>::new())).contains("<ul"));

        let html = render(&base().with_highlights(["fast", "simple"]));
        assert_eq!(html.matches("<li>").count(), 2);
        let fast = html.find("<li>fast</li>").unwrap();
        let simple = html.find("<li>simple</li>").unwrap();
        assert!(fast < simple);
    }

    #[test]
    fn test_tech_badges_in_order() {
        let html = render(&base());
        let python = html.find(">Python</span>").unwrap();
        let json = html.find(">JSON</span>").unwrap();
        assert!(python < json);
        assert_eq!(html.matches("class=\"badge\"").count(), 2);
    }

    #[test]
    fn test_duplicate_titles_get_distinct_keys() {
        let projects = vec![Project::new("A", "first"), Project::new("A", "second")];
        let html = project_cards(&projects).unwrap().into_string();
        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.contains(r#"data-key="0""#));
        assert!(html.contains(r#"data-key="1""#));
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_no_projects_renders_nothing() {
        assert!(project_cards(&[]).unwrap().is_empty());
    }
}
