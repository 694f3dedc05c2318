//! Job Search Server binary

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use search::{JobSearchService, SerpApiProvider};
use server::{AppState, ServerConfig, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(provider = ?config.provider, "Starting job search server");

    let provider = SerpApiProvider::new(config.provider.clone());
    let state = AppState::new(JobSearchService::new(Arc::new(provider)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!("Server running at http://{}", config.bind);
    info!(
        "Try: curl 'http://{}/jobs?jobTitle=developer&location=New%20York'",
        config.bind
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
