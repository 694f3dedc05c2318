//! Search provider configuration.

use std::fmt;

use clap::Args;

/// Default SerpApi JSON endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Default number of results requested per search.
pub const DEFAULT_NUM_RESULTS: u32 = 50;

/// Settings for [`crate::SerpApiProvider`].
///
/// Resolved once at startup and handed to the provider explicitly.
#[derive(Clone, Args)]
pub struct ProviderConfig {
    /// SerpApi credential
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Search endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Result count hint sent with each search (0 leaves it to the provider)
    #[arg(long, default_value_t = DEFAULT_NUM_RESULTS)]
    pub num_results: u32,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = num_results;
        self
    }

    pub(crate) fn num_hint(&self) -> Option<u32> {
        (self.num_results > 0).then_some(self.num_results)
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("num_results", &self.num_results)
            .finish()
    }
}
