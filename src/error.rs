use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// Failures of the cache backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

// Failures talking to the remote AI services
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion response carried no content")]
    EmptyCompletion,

    #[error("upstream returned an error: {0}")]
    Upstream(String),
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("forbidden")]
    Forbidden,

    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("completion failed: {0}")]
    Completion(#[source] ClientError),

    #[error("Failed to generate suggestions")]
    Suggestions(#[source] ClientError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Forbidden => StatusCode::FORBIDDEN,
            GatewayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            GatewayError::Completion(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Suggestions(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
