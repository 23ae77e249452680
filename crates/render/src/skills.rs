use fetch::SkillCount;
use tracing::debug;

use crate::html::escape_html;
use crate::region::Region;

pub const NO_SKILLS: &str = "No skills found.";

pub fn render_top_skills(skills: &[SkillCount]) -> String {
    if skills.is_empty() {
        return format!("<p>{}</p>", NO_SKILLS);
    }

    let stats: String = skills
        .iter()
        .map(|skill| {
            format!(
                r#"<div class="skill-stat"><span class="skill-name">{}</span><span class="skill-count">{}</span></div>"#,
                escape_html(&skill.name),
                skill.count
            )
        })
        .collect();

    format!(r#"<div class="skills-stats">{}</div>"#, stats)
}

pub fn display_top_skills(region: &mut Region, skills: &[SkillCount]) {
    debug!(count = skills.len(), "Rendering top skills");
    region.set_content("", render_top_skills(skills));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_skills() {
        let mut region = Region::new("skills-content");
        display_top_skills(&mut region, &[]);
        assert_eq!(region.inner_html(), "<p>No skills found.</p>");
    }

    #[test]
    fn test_name_count_pairs() {
        let html = render_top_skills(&[
            SkillCount { name: "python".to_string(), count: 4 },
            SkillCount { name: "rust".to_string(), count: 2 },
        ]);

        assert_eq!(html.matches(r#"class="skill-stat""#).count(), 2);
        assert!(html.contains(
            r#"<span class="skill-name">python</span><span class="skill-count">4</span>"#
        ));
        assert!(html.contains(
            r#"<span class="skill-name">rust</span><span class="skill-count">2</span>"#
        ));
    }
}
