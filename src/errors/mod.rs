/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;
use utoipa::ToSchema;

/// Prefix shared by every user-visible upstream failure message
pub const FETCH_ERROR_PREFIX: &str = "Error fetching NASA APOD";

/// Any non-success outcome of the outbound APOD call.
///
/// HTTP error statuses, transport failures and undecodable bodies all collapse
/// into this one kind. Only the message survives; the request URL (which
/// carries the API key) is stripped before the message is built.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UpstreamFailure {
    message: String,
}

impl UpstreamFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message shown to clients of either entry point
    pub fn describe(&self) -> String {
        format!("{}: {}", FETCH_ERROR_PREFIX, self.message)
    }
}

impl From<reqwest::Error> for UpstreamFailure {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::new(message)
    }
}

/// JSON error envelope returned by the API path
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = Error)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.describe()),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
