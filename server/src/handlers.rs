use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use common::{JobResult, SearchFilters};

use crate::{ApiError, AppState};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Handler for GET /jobs?jobTitle=&location=&companies=&workType=
///
/// Returns the results as a bare array. The job board tally is logged by the
/// search service and never sent to the client.
pub async fn jobs_handler(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<Vec<JobResult>>, ApiError> {
    let report = state.search.search(&filters).await?;
    Ok(Json(report.into_jobs()))
}

/// Handler for GET / (search page)
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    "ok"
}
