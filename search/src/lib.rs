//! Job search against an external web search provider.
//!
//! Turns [`common::SearchFilters`] into a provider query, fetches the organic
//! results and maps them onto [`common::JobResult`]s.

pub mod config;
pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

pub use config::ProviderConfig;
pub use errors::ProviderError;
pub use providers::{SearchProvider, SerpApiProvider};
pub use service::{JobSearchService, SearchReport};
pub use types::{OrganicResult, SearchParams};

/// Convenience type alias for Results with ProviderError.
pub type Result<T> = std::result::Result<T, ProviderError>;
