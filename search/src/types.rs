//! Provider request and response shapes.

use common::JobResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for one provider search, minus the credential.
///
/// Locale, market and domain are fixed; only the query, location and result
/// count hint vary per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub engine: &'static str,
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub hl: &'static str,
    pub gl: &'static str,
    pub google_domain: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
}

impl SearchParams {
    pub const ENGINE: &'static str = "google";
    pub const LANGUAGE: &'static str = "en";
    pub const COUNTRY: &'static str = "us";
    pub const GOOGLE_DOMAIN: &'static str = "google.com";

    pub fn new(query: impl Into<String>, location: Option<&str>, num: Option<u32>) -> Self {
        Self {
            engine: Self::ENGINE,
            q: query.into(),
            location: location.map(str::to_string),
            hl: Self::LANGUAGE,
            gl: Self::COUNTRY,
            google_domain: Self::GOOGLE_DOMAIN,
            num,
        }
    }
}

/// A single organic (unpaid) result as returned by the provider.
///
/// Fields are kept as raw JSON so an oddly typed value only affects its own row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub link: Option<Value>,
}

impl OrganicResult {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            link: Some(Value::String(link.into())),
        }
    }

    /// Maps the raw record onto a [`JobResult`], missing fields becoming empty.
    pub fn to_job_result(&self) -> JobResult {
        JobResult {
            title: text(self.title.as_ref()),
            url: text(self.link.as_ref()),
        }
    }
}

/// Strings as-is, null or absent as empty, anything else as its JSON text.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Top-level provider response. Only the parts we read are modelled.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub organic_results: Option<Vec<OrganicResult>>,
    #[serde(default)]
    pub error: Option<String>,
}
