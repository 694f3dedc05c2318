//! Job Search Server
//!
//! Exposes the job search over HTTP using Axum: a JSON endpoint for the
//! aggregated results and a small browser page that calls it.

use std::sync::Arc;

use axum::{Router, routing::get};
use search::JobSearchService;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub search: JobSearchService,
}

impl AppState {
    pub fn new(search: JobSearchService) -> Arc<Self> {
        Arc::new(Self { search })
    }
}

/// Builds the router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/jobs", get(handlers::jobs_handler))
        .with_state(state)
}
