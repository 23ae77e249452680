pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod schema;

pub use client::{ApiClient, ProfileApi};
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use metrics::{MetricsSnapshot, RequestMetrics};
pub use schema::{HealthStatus, Profile, Project, SearchResult, Skill, SkillCount, WorkItem};
