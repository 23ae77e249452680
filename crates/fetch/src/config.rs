use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";
pub const PRODUCTION_BASE_URL: &str = "https://me-api-play.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub environment: Environment,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development, // API served from the local machine
    Production,  // Hosted API
}

impl Environment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl ClientConfig {
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            base_url: DEVELOPMENT_BASE_URL.to_string(),
            request_timeout_secs: 10,
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            base_url: PRODUCTION_BASE_URL.to_string(),
            request_timeout_secs: 10,
        }
    }

    /// Pick the environment the way a page served from `hostname` would.
    pub fn for_host(hostname: &str) -> Self {
        if hostname == "localhost" {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Custom base URL, e.g. a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::development()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Resolve from `ME_API_ENV`, `ME_API_BASE_URL` and `ME_API_TIMEOUT_SECS`.
    /// Unset or unparseable values keep the production defaults.
    pub fn from_env() -> Self {
        let mut config = std::env::var("ME_API_ENV")
            .ok()
            .and_then(|v| Environment::parse(&v))
            .map(|env| match env {
                Environment::Development => Self::development(),
                Environment::Production => Self::production(),
            })
            .unwrap_or_default();

        if let Ok(base_url) = std::env::var("ME_API_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_string();
            }
        }

        if let Some(secs) = std::env::var("ME_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.request_timeout_secs = secs;
        }

        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash, ready for `format!("{}/path")`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
