use anyhow::{Context, Result};
use app::{InitOutcome, SearchInput, handle_search, init_app};
use fetch::{ApiClient, ClientConfig};
use render::Page;
use std::io::Write;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    info!(
        environment = ?config.environment,
        base_url = %config.base_url,
        timeout_secs = config.request_timeout_secs,
        "Resolved API configuration"
    );

    let client = ApiClient::new(&config);

    match client.health().await {
        Ok(health) if health.is_ok() => info!("API is healthy"),
        Ok(health) => warn!(status = %health.status, "API reports degraded health"),
        Err(e) => warn!(error = %e, "Health check failed"),
    }

    let mut page = Page::new();
    if init_app(&client, &mut page).await == InitOutcome::Failed {
        warn!("Page rendered with load errors");
    }

    // Optional search, same inputs as the page's two search fields
    let input = SearchInput::new(
        std::env::var("ME_SEARCH_SKILL").unwrap_or_default(),
        std::env::var("ME_SEARCH_KEYWORD").unwrap_or_default(),
    );
    if !input.skill.trim().is_empty() || !input.keyword.trim().is_empty() {
        let outcome = handle_search(&client, &mut page, &input).await;
        info!(outcome = ?outcome, "Search finished");
    }

    if let Some(alert) = page.take_alert() {
        warn!(alert = %alert, "Page alert");
    }

    let snapshot = client.metrics().snapshot();
    info!(
        metrics = %serde_json::to_string(&snapshot).context("Failed to serialize metrics")?,
        "Request metrics"
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.to_html().as_bytes())
        .context("Failed to write page to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
