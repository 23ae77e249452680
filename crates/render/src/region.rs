use crate::html::escape_html;

pub const LOADING_CLASS: &str = "loading";
pub const ERROR_CLASS: &str = "error";

/// A designated area of the page. Every write replaces its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: String,
    class: String,
    html: String,
    hidden: bool,
}

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: String::new(),
            html: String::new(),
            hidden: false,
        }
    }

    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            hidden: true,
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn inner_html(&self) -> &str {
        &self.html
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_loading(&self) -> bool {
        self.class == LOADING_CLASS
    }

    pub fn is_error(&self) -> bool {
        self.class == ERROR_CLASS
    }

    pub fn set_content(&mut self, class: &str, html: String) {
        self.class = class.to_string();
        self.html = html;
    }

    pub fn show_loading(&mut self, message: &str) {
        self.set_content(LOADING_CLASS, escape_html(message));
    }

    pub fn show_error(&mut self, message: &str) {
        self.set_content(ERROR_CLASS, escape_html(message));
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn to_html(&self) -> String {
        let mut attrs = format!(r#"id="{}""#, escape_html(&self.id));
        if !self.class.is_empty() {
            attrs.push_str(&format!(r#" class="{}""#, escape_html(&self.class)));
        }
        if self.hidden {
            attrs.push_str(" hidden");
        }
        format!("<div {}>{}</div>", attrs, self.html)
    }
}

/// The regions the flows write to, plus the last user-facing alert.
#[derive(Debug, Clone)]
pub struct Page {
    pub profile: Region,
    pub projects: Region,
    pub skills: Region,
    pub search_results: Region,
    alert: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            profile: Region::new("profile-content"),
            projects: Region::new("projects-content"),
            skills: Region::new("skills-content"),
            search_results: Region::hidden("search-results-content"),
            alert: None,
        }
    }

    pub fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Whole document with every region in page order.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Me-API Playground</title></head>\n<body>\n");
        html.push_str("<section id=\"profile-section\"><h2>Profile</h2>");
        html.push_str(&self.profile.to_html());
        html.push_str("</section>\n");
        html.push_str("<section id=\"search-results-section\"><h2>Search Results</h2>");
        html.push_str(&self.search_results.to_html());
        html.push_str("</section>\n");
        html.push_str("<section id=\"projects-section\"><h2>Projects</h2>");
        html.push_str(&self.projects.to_html());
        html.push_str("</section>\n");
        html.push_str("<section id=\"skills-section\"><h2>Top Skills</h2>");
        html.push_str(&self.skills.to_html());
        html.push_str("</section>\n</body>\n</html>\n");
        html
    }
}
