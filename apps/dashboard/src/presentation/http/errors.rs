//! HTTP error handling and response conversion.
//!
//! Handler failures are mapped to status codes and a JSON body of the form
//! `{"error": "<user-safe message>"}`. The detailed cause is logged, never
//! returned to the client.

use crate::domain::metrics::MetricsError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// No route matched (404).
    NotFound(String),

    /// Host metrics could not be read for this request (500).
    MetricsUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::MetricsUnavailable(msg) => write!(f, "Metrics unavailable: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MetricsUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::MetricsUnavailable(_) => "Metrics unavailable".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::NOT_FOUND => tracing::warn!("error={}", self),
            _ => tracing::info!("error={}", self),
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<MetricsError> for AppError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::MetricsUnavailable(msg) => AppError::MetricsUnavailable(msg),
        }
    }
}
