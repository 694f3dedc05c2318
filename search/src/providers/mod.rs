//! Search provider implementations.

use async_trait::async_trait;

use crate::Result;
use crate::types::OrganicResult;

pub mod serpapi;

pub use serpapi::SerpApiProvider;

/// Source of organic web search results.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Runs one search for `query`, optionally scoped to `location`.
    ///
    /// Results come back in the provider's order.
    ///
    /// # Errors
    /// - `ProviderError::Request` - Transport failure
    /// - `ProviderError::Status` - Non-success HTTP status
    /// - `ProviderError::Api` - Provider reported an error
    /// - `ProviderError::Decode` - Response had an unexpected shape
    async fn search(&self, query: &str, location: Option<&str>) -> Result<Vec<OrganicResult>>;
}
