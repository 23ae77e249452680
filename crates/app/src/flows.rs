use fetch::ProfileApi;
use render::{Page, display_profile, display_projects, display_search_results, display_top_skills};
use tracing::{error, info, warn};

use crate::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Loaded,
    Failed,
}

/// Raw contents of the two search inputs.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub skill: String,
    pub keyword: String,
}

impl SearchInput {
    pub fn new(skill: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            keyword: keyword.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Both inputs were blank; nothing was requested.
    Prompted,
    /// Keyword search rendered this many results.
    Results(usize),
    /// Skill search rendered this many projects.
    Projects(usize),
    Failed,
}

/// Page-ready flow: profile, its projects, and the top skills.
///
/// Profile and top skills are fetched concurrently. Any failure puts an error
/// message in all three regions.
pub async fn init_app<A>(api: &A, page: &mut Page) -> InitOutcome
where
    A: ProfileApi + ?Sized,
{
    page.profile.show_loading(messages::LOADING);
    page.projects.show_loading(messages::LOADING);
    page.skills.show_loading(messages::LOADING);

    match tokio::try_join!(api.fetch_profile(), api.fetch_top_skills()) {
        Ok((profile, top_skills)) => {
            display_profile(&mut page.profile, &profile);
            display_projects(&mut page.projects, &profile.projects);
            display_top_skills(&mut page.skills, &top_skills);

            info!(
                name = %profile.name,
                projects = profile.projects.len(),
                top_skills = top_skills.len(),
                "Page initialized"
            );
            InitOutcome::Loaded
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize page");
            page.profile.show_error(messages::PROFILE_LOAD_ERROR);
            page.projects.show_error(messages::PROJECTS_LOAD_ERROR);
            page.skills.show_error(messages::SKILLS_LOAD_ERROR);
            InitOutcome::Failed
        }
    }
}

/// Search action. A non-empty keyword wins over the skill filter.
pub async fn handle_search<A>(api: &A, page: &mut Page, input: &SearchInput) -> SearchOutcome
where
    A: ProfileApi + ?Sized,
{
    let skill = input.skill.trim();
    let keyword = input.keyword.trim();

    if skill.is_empty() && keyword.is_empty() {
        warn!("Search triggered with empty inputs");
        page.alert(messages::EMPTY_SEARCH_PROMPT);
        return SearchOutcome::Prompted;
    }

    if !keyword.is_empty() {
        page.search_results.show_loading(messages::SEARCHING);
        match api.search_content(keyword).await {
            Ok(results) => {
                display_search_results(&mut page.search_results, &results);
                info!(query = keyword, results = results.len(), "Search completed");
                SearchOutcome::Results(results.len())
            }
            Err(e) => {
                error!(query = keyword, error = %e, "Search failed");
                page.search_results.show_error(messages::SEARCH_ERROR);
                page.search_results.show();
                SearchOutcome::Failed
            }
        }
    } else {
        page.projects.show_loading(messages::SEARCHING_PROJECTS);
        match api.fetch_projects_by_skill(skill).await {
            Ok(projects) => {
                display_projects(&mut page.projects, &projects);
                info!(skill = skill, projects = projects.len(), "Project search completed");
                SearchOutcome::Projects(projects.len())
            }
            Err(e) => {
                error!(skill = skill, error = %e, "Project search failed");
                page.projects.show_error(messages::PROJECT_SEARCH_ERROR);
                SearchOutcome::Failed
            }
        }
    }
}
