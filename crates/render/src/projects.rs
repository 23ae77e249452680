use fetch::Project;
use tracing::debug;

use crate::html::{anchor, escape_html};
use crate::region::Region;

pub const NO_PROJECTS: &str = "No projects found for this skill.";

/// One `project-card`. GitHub and Demo anchors appear only when the link is present.
pub fn render_project_card(project: &Project) -> String {
    let mut links = String::new();
    if let Some(github) = &project.github_link {
        links.push_str(&anchor(github, "GitHub"));
    }
    if let Some(demo) = &project.demo_link {
        links.push_str(&anchor(demo, "Demo"));
    }

    format!(
        r#"<div class="project-card"><h3>{}</h3><p>{}</p><div class="project-links">{}</div></div>"#,
        escape_html(&project.title),
        escape_html(&project.description),
        links
    )
}

pub fn render_projects_grid(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(render_project_card).collect();
    format!(r#"<div class="projects-grid">{}</div>"#, cards)
}

pub fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return format!("<p>{}</p>", NO_PROJECTS);
    }
    render_projects_grid(projects)
}

pub fn display_projects(region: &mut Region, projects: &[Project]) {
    debug!(count = projects.len(), region = region.id(), "Rendering projects");
    region.set_content("", render_projects(projects));
}
