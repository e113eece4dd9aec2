// src/api/error.rs
// Centralized error handling for HTTP API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::llm::ProviderError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    /// Create a new internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("INTERNAL_ERROR".to_string()),
        }
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    /// Create an error carrying the collaborator's status and payload so a
    /// failing deploy can be diagnosed from the client side.
    pub fn upstream(status: u16, body: &str) -> Self {
        Self {
            message: format!("OpenAI error {status}: {body}"),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("UPSTREAM_ERROR".to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => {
                error!("advice request rejected: OPENAI_API_KEY not set");
                ApiError::internal("OPENAI_API_KEY not set")
            }
            ProviderError::Upstream { status, body } => {
                error!(status, "upstream error from OpenAI");
                ApiError::upstream(status, &body)
            }
            ProviderError::Transport(e) => {
                error!("transport error calling OpenAI: {e}");
                ApiError::internal(format!("OpenAI request failed: {e}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::bad_request("Missing 'question' or 'profile'");
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Missing 'question' or 'profile'");
    }

    #[test]
    fn test_upstream_error_carries_status_and_body() {
        let error = ApiError::upstream(429, "{\"error\":\"rate limited\"}");
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message.contains("429"));
        assert!(error.message.contains("rate limited"));
    }

    #[test]
    fn test_provider_error_mapping() {
        let error: ApiError = ProviderError::MissingCredential.into();
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "OPENAI_API_KEY not set");

        let error: ApiError = ProviderError::Upstream {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message.contains("503"));
    }
}
