use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub education: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub work_experience: Vec<WorkItem>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub linkedin_link: Option<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Entry of the `/skills/top` ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub role: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub website_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String, // "project", "skill", "work"
    pub description: String,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
