//! Shared job search types.
//!
//! Filters sent by the browser, the `(title, url)` pairs sent back, and the
//! pure helpers that sit between them: query assembly and job board detection.

use serde::{Deserialize, Serialize};

mod board;
mod query;

pub use board::{JobBoard, count_job_boards, is_job_board};
pub use query::build_query;

/// Filters for a single job search, as submitted by the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub companies: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
}

/// One search hit as returned to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub title: String,
    pub url: String,
}

impl JobResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Whether `url` points at one of the known job boards.
    pub fn is_job_board(&self) -> bool {
        is_job_board(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_deserialize_from_camel_case() {
        let filters: SearchFilters = serde_json::from_str(
            r#"{"jobTitle":"Engineer","location":"NY","companies":"Google","workType":"remote"}"#,
        )
        .unwrap();

        assert_eq!(filters.job_title.as_deref(), Some("Engineer"));
        assert_eq!(filters.location, "NY");
        assert_eq!(filters.companies.as_deref(), Some("Google"));
        assert_eq!(filters.work_type.as_deref(), Some("remote"));
    }

    #[test]
    fn test_filters_missing_keys_default() {
        let filters: SearchFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, SearchFilters::default());
        assert_eq!(filters.location, "");
    }

    #[test]
    fn test_job_result_serializes_title_and_url_only() {
        let job = JobResult::new("Rust Engineer", "https://www.linkedin.com/jobs/123");
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "title": "Rust Engineer",
                "url": "https://www.linkedin.com/jobs/123"
            })
        );
    }

    #[test]
    fn test_job_result_is_job_board() {
        assert!(JobResult::new("a", "https://uk.indeed.com/viewjob?jk=1").is_job_board());
        assert!(!JobResult::new("b", "https://acme.com/careers/1").is_job_board());
        assert!(!JobResult::default().is_job_board());
    }
}
