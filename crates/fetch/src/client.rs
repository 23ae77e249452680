use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::metrics::{RequestMetrics, TimedOperation};
use crate::schema::{HealthStatus, Profile, Project, SearchResult, SkillCount};

/// The four read operations the page flows depend on.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_profile(&self) -> ApiResult<Profile>;

    /// An empty `skill` is sent as-is; the server decides what it matches.
    async fn fetch_projects_by_skill(&self, skill: &str) -> ApiResult<Vec<Project>>;

    async fn fetch_top_skills(&self) -> ApiResult<Vec<SkillCount>>;

    async fn search_content(&self, query: &str) -> ApiResult<Vec<SearchResult>>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
    metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.normalized_base_url().to_string(),
            timeout: config.request_timeout(),
            client: reqwest::Client::new(),
            metrics: RequestMetrics::new(),
        }
    }

    /// Override the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Probe `/health`.
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get_json("health", "/health").await
    }

    /// Top skills capped at `limit` entries (the server defaults to 10).
    pub async fn fetch_top_skills_limited(&self, limit: usize) -> ApiResult<Vec<SkillCount>> {
        self.get_json("fetch_top_skills", &format!("/skills/top?limit={}", limit))
            .await
    }

    async fn get_json<T>(&self, operation: &str, path_and_query: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, path_and_query);
        let timer = TimedOperation::start();

        let result: ApiResult<T> = match tokio::time::timeout(self.timeout, self.send(&url)).await {
            Ok(result) => result,
            Err(_) => {
                self.metrics.record_timeout();
                Err(ApiError::Timeout {
                    after: self.timeout,
                })
            }
        };

        let elapsed = timer.elapsed();
        self.metrics.record_request(result.is_ok(), elapsed);

        match result {
            Ok(value) => {
                debug!(
                    operation = operation,
                    url = %url,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Request succeeded"
                );
                Ok(value)
            }
            Err(e) => {
                error!(
                    operation = operation,
                    url = %url,
                    error = %e,
                    "Request failed"
                );
                Err(e)
            }
        }
    }

    async fn send<T>(&self, url: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProfileApi for ApiClient {
    async fn fetch_profile(&self) -> ApiResult<Profile> {
        self.get_json("fetch_profile", "/profile").await
    }

    async fn fetch_projects_by_skill(&self, skill: &str) -> ApiResult<Vec<Project>> {
        let path = format!("/projects?skill={}", urlencoding::encode(skill));
        self.get_json("fetch_projects_by_skill", &path).await
    }

    async fn fetch_top_skills(&self) -> ApiResult<Vec<SkillCount>> {
        self.get_json("fetch_top_skills", "/skills/top").await
    }

    async fn search_content(&self, query: &str) -> ApiResult<Vec<SearchResult>> {
        let path = format!("/search?q={}", urlencoding::encode(query));
        self.get_json("search_content", &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(base_url))
    }

    // Echoes the raw query string back as the project description.
    async fn echo_projects(RawQuery(query): RawQuery) -> Json<Value> {
        Json(json!([{
            "id": 1,
            "title": "echo",
            "description": query.unwrap_or_default(),
        }]))
    }

    async fn echo_search(RawQuery(query): RawQuery) -> Json<Value> {
        Json(json!([{
            "type": "project",
            "title": "echo",
            "description": query.unwrap_or_default(),
            "relevance_score": 0.5,
        }]))
    }

    fn api_router() -> Router {
        Router::new()
            .route(
                "/profile",
                get(|| async {
                    Json(json!({
                        "id": 1,
                        "name": "Ada Lovelace",
                        "email": "ada@example.com",
                        "education": "Analytical Engines",
                        "skills": [{"id": 1, "name": "rust"}],
                        "projects": [],
                        "work_experience": [],
                        "github_link": "https://github.com/ada"
                    }))
                }),
            )
            .route("/projects", get(echo_projects))
            .route("/search", get(echo_search))
            .route(
                "/skills/top",
                get(|RawQuery(query): RawQuery| async move {
                    let name = query.unwrap_or_else(|| "none".to_string());
                    Json(json!([{"name": name, "count": 3}]))
                }),
            )
            .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
    }

    #[tokio::test]
    async fn test_fetch_profile() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&base_url);

        let profile = client.fetch_profile().await.unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.github_link.as_deref(), Some("https://github.com/ada"));
        assert!(profile.linkedin_link.is_none());

        let snapshot = client.metrics().snapshot();
        assert_eq!(snapshot.total_requests, 1);
        assert_eq!(snapshot.successful_requests, 1);
    }

    #[tokio::test]
    async fn test_skill_is_percent_encoded() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&base_url);

        let projects = client.fetch_projects_by_skill("c++ & rust").await.unwrap();
        assert_eq!(projects[0].description, "skill=c%2B%2B%20%26%20rust");
    }

    #[tokio::test]
    async fn test_empty_skill_is_sent() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&base_url);

        let projects = client.fetch_projects_by_skill("").await.unwrap();
        assert_eq!(projects[0].description, "skill=");
    }

    #[tokio::test]
    async fn test_search_query_is_percent_encoded() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&base_url);

        let results = client.search_content("web apps?").await.unwrap();
        assert_eq!(results[0].description, "q=web%20apps%3F");
        assert_eq!(results[0].kind, "project");
    }

    #[tokio::test]
    async fn test_top_skills_with_and_without_limit() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&base_url);

        let skills = client.fetch_top_skills().await.unwrap();
        assert_eq!(skills[0].name, "none");
        assert_eq!(skills[0].count, 3);

        let limited = client.fetch_top_skills_limited(5).await.unwrap();
        assert_eq!(limited[0].name, "limit=5");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let base_url = spawn_server(api_router()).await;
        let client = client_for(&format!("{}/", base_url));

        assert!(client.health().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let app = Router::new().route(
            "/profile",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base_url = spawn_server(app).await;
        let client = client_for(&base_url);

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus { status: 500 }));
        assert_eq!(err.status(), Some(500));

        let snapshot = client.metrics().snapshot();
        assert_eq!(snapshot.failed_requests, 1);
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let base_url = spawn_server(Router::new()).await;
        let client = client_for(&base_url);

        let err = client.fetch_top_skills().await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let app = Router::new().route("/search", get(|| async { "not json" }));
        let base_url = spawn_server(app).await;
        let client = client_for(&base_url);

        let err = client.search_content("rust").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let app = Router::new().route(
            "/profile",
            get(|| async { Json(json!({"name": "only a name"})) }),
        );
        let base_url = spawn_server(app).await;
        let client = client_for(&base_url);

        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client.fetch_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let app = Router::new().route(
            "/profile",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base_url = spawn_server(app).await;
        let client = client_for(&base_url).with_timeout(Duration::from_millis(100));

        let err = client.fetch_profile().await.unwrap_err();
        assert!(err.is_timeout());
        assert!(matches!(err, ApiError::Timeout { after } if after == Duration::from_millis(100)));

        let snapshot = client.metrics().snapshot();
        assert_eq!(snapshot.timed_out_requests, 1);
        assert_eq!(snapshot.failed_requests, 1);
    }
}
