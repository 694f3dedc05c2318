use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use search::ProviderError;
use serde::Serialize;

/// Errors surfaced by the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// The upstream search provider failed.
    Provider(ProviderError),
}

/// JSON error body. Provider details stay in the server log.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Provider(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Provider(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    error: "Search provider request failed",
                    upstream_status: err.upstream_status(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
