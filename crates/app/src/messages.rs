//! User-facing strings written into page regions.

pub const LOADING: &str = "Loading...";
pub const SEARCHING: &str = "Searching...";
pub const SEARCHING_PROJECTS: &str = "Searching projects...";

pub const PROFILE_LOAD_ERROR: &str = "Error loading profile. Please check if the backend is running.";
pub const PROJECTS_LOAD_ERROR: &str = "Error loading projects.";
pub const SKILLS_LOAD_ERROR: &str = "Error loading skills.";

pub const SEARCH_ERROR: &str = "Error performing search. Please try again.";
pub const PROJECT_SEARCH_ERROR: &str = "Error searching projects. Please try again.";

pub const EMPTY_SEARCH_PROMPT: &str = "Please enter a search term";
