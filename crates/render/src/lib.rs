pub mod html;
pub mod profile;
pub mod projects;
pub mod region;
pub mod search;
pub mod skills;

pub use html::{escape_html, format_relevance};
pub use profile::{display_profile, render_profile};
pub use projects::{display_projects, render_projects};
pub use region::{Page, Region};
pub use search::{display_search_results, render_search_results};
pub use skills::{display_top_skills, render_top_skills};
