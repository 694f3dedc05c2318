//! SerpApi Google search provider.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::SearchProvider;
use crate::config::ProviderConfig;
use crate::Result;
use crate::errors::ProviderError;
use crate::types::{OrganicResult, SearchParams, SearchResponse};

/// Google search through the SerpApi JSON endpoint.
///
/// One GET per search, no retries, reqwest's default timeouts.
#[derive(Debug, Clone)]
pub struct SerpApiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl SerpApiProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    pub fn params(&self, query: &str, location: Option<&str>) -> SearchParams {
        SearchParams::new(query, location, self.config.num_hint())
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &str, location: Option<&str>) -> Result<Vec<OrganicResult>> {
        let params = self.params(query, location);
        debug!(
            endpoint = %self.config.endpoint,
            q = %params.q,
            location = ?params.location,
            num = ?params.num,
            "Querying search provider"
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Search provider returned error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if let Some(message) = parsed.error {
            return Err(ProviderError::Api { message });
        }

        let results = parsed.organic_results.unwrap_or_default();
        debug!(count = results.len(), "Received organic results");
        Ok(results)
    }
}
