//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::InsightsError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested app is not on the leaderboard
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Query string that does not deserialize; carries the parser's message
    InvalidQuery(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::NotFound(msg) => ApiError::new("NOT_FOUND", msg),
            AppError::BadRequest(msg) => ApiError::new("BAD_REQUEST", msg),
            AppError::InvalidQuery(details) => {
                ApiError::new("BAD_REQUEST", "Invalid query string").with_details(details)
            }
            AppError::Internal(msg) => ApiError::new("INTERNAL_ERROR", msg),
        };

        (status, Json(error)).into_response()
    }
}

impl From<InsightsError> for AppError {
    fn from(err: InsightsError) -> Self {
        if err.is_client_error() {
            log::warn!("Rejected request: {}", err);
        }
        match err {
            InsightsError::InvalidFilter(_) => AppError::BadRequest(err.to_string()),
            InsightsError::UnknownApp(_) => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let details = rejection.body_text();
        log::warn!("Rejected query string: {}", details);
        AppError::InvalidQuery(details)
    }
}
