use fetch::{Profile, WorkItem};
use tracing::debug;

use crate::html::{anchor, escape_html};
use crate::projects::render_projects_grid;
use crate::region::Region;

pub const NO_WORK_EXPERIENCE: &str = "No work experience listed";

fn field(label: &str, body: &str) -> String {
    format!(
        r#"<div class="profile-field"><label>{}</label>{}</div>"#,
        label, body
    )
}

fn text_field(label: &str, value: &str) -> String {
    field(label, &format!("<span>{}</span>", escape_html(value)))
}

/// Optional external link, shown with the URL itself as the anchor text.
fn link_field(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => field(label, &format!("<span>{}</span>", anchor(url, url))),
        None => String::new(),
    }
}

fn render_work_item(work: &WorkItem) -> String {
    let website = work
        .website_link
        .as_deref()
        .map(|url| format!(" {}", anchor(url, "Website")))
        .unwrap_or_default();

    format!(
        r#"<li class="work-item">{} at {} — {}{}</li>"#,
        escape_html(&work.role),
        escape_html(&work.company),
        escape_html(&work.duration),
        website
    )
}

fn render_work_experience(items: &[WorkItem]) -> String {
    if items.is_empty() {
        return format!("<p>{}</p>", NO_WORK_EXPERIENCE);
    }
    let entries: String = items.iter().map(render_work_item).collect();
    format!(r#"<ul class="work-list">{}</ul>"#, entries)
}

pub fn render_profile(profile: &Profile) -> String {
    let skills: String = profile
        .skills
        .iter()
        .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, escape_html(&skill.name)))
        .collect();

    let mut html = String::new();
    html.push_str(&text_field("Name", &profile.name));
    html.push_str(&text_field("Email", &profile.email));
    html.push_str(&text_field("Education", &profile.education));
    html.push_str(&field(
        "Skills",
        &format!(r#"<div class="skills-list">{}</div>"#, skills),
    ));
    html.push_str(&field("Projects", &render_projects_grid(&profile.projects)));
    html.push_str(&field(
        "Work Experience",
        &format!("<div>{}</div>", render_work_experience(&profile.work_experience)),
    ));
    html.push_str(&link_field("GitHub", profile.github_link.as_deref()));
    html.push_str(&link_field("LinkedIn", profile.linkedin_link.as_deref()));
    html.push_str(&link_field("Portfolio", profile.portfolio_link.as_deref()));
    html
}

pub fn display_profile(region: &mut Region, profile: &Profile) {
    debug!(
        skills = profile.skills.len(),
        projects = profile.projects.len(),
        work_items = profile.work_experience.len(),
        "Rendering profile"
    );
    region.set_content("profile-info", render_profile(profile));
}
