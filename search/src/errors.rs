//! Error types for search provider calls.

use thiserror::Error;

/// Failures talking to the search provider.
///
/// Missing fields or malformed URLs inside an otherwise valid response are
/// not errors; they degrade to empty values during mapping.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Search provider request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("Search provider returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    /// The provider reported an error inside a well-formed response.
    #[error("Search provider error: {message}")]
    Api {
        /// Message from the provider's `error` field
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected search provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// Upstream HTTP status, when the provider answered with one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::Request(err) => err.status().map(|s| s.as_u16()),
            ProviderError::Api { .. } | ProviderError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the api key.
        ProviderError::Request(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status() {
        let err = ProviderError::Status {
            status: 401,
            body: "Invalid API key.".to_string(),
        };
        assert_eq!(err.upstream_status(), Some(401));

        let err = ProviderError::Api {
            message: "out of searches".to_string(),
        };
        assert_eq!(err.upstream_status(), None);
    }
}
