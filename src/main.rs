use anyhow::{Context, Result};
use comments_fetch::DataService;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = DataService::new();
    info!(endpoint = service.endpoint(), "fetching comments");

    let response = service
        .fetch_data()
        .await
        .with_context(|| format!("GET {} failed", service.endpoint()))?;
    let status = response.status();
    let body = response.text().await.context("reading response body")?;
    info!(%status, bytes = body.len(), "response received");

    match serde_json::from_str::<Vec<serde_json::Value>>(&body) {
        Ok(comments) => info!(count = comments.len(), "decoded comments"),
        Err(e) => warn!(error = %e, "body is not a comment list"),
    }

    println!("{}", body);
    Ok(())
}
