//! Job search orchestration.

use std::sync::Arc;

use common::{JobResult, SearchFilters, build_query, count_job_boards};
use tracing::{error, info};

use crate::Result;
use crate::providers::SearchProvider;
use crate::types::OrganicResult;

/// Outcome of one job search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Mapped results, in provider order.
    pub jobs: Vec<JobResult>,
    /// How many of `jobs` come from known job boards. Kept for logging only.
    pub job_board_count: usize,
}

impl SearchReport {
    pub fn into_jobs(self) -> Vec<JobResult> {
        self.jobs
    }
}

/// Builds the query from filters, asks the provider once and maps the results.
///
/// Holds no per-request state; clones share the provider.
#[derive(Debug, Clone)]
pub struct JobSearchService {
    provider: Arc<dyn SearchProvider>,
}

impl JobSearchService {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Runs a job search for `filters`.
    ///
    /// # Errors
    /// Provider failures are logged and returned unchanged.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchReport> {
        info!(
            job_title = ?filters.job_title,
            location = %filters.location,
            companies = ?filters.companies,
            work_type = ?filters.work_type,
            "Searching jobs"
        );

        let query = build_query(filters);
        let location = Some(filters.location.as_str()).filter(|l| !l.is_empty());

        let organic = self
            .provider
            .search(&query, location)
            .await
            .inspect_err(|err| error!(error = %err, query = %query, "Error fetching jobs"))?;

        let jobs: Vec<JobResult> = organic.iter().map(OrganicResult::to_job_result).collect();
        let job_board_count = count_job_boards(&jobs);

        info!(
            count = jobs.len(),
            job_board_count,
            "Found {} job results and {} from job boards",
            jobs.len(),
            job_board_count
        );

        Ok(SearchReport {
            jobs,
            job_board_count,
        })
    }
}
