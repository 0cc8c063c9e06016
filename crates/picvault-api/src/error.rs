//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Use `AppError`
//! (or types that implement `Into<AppError>`) for errors and `.map_err(Into::into)`
//! so they become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picvault_core::{AppError, LogLevel};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Upstream response body, echoed for non-404 upstream failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from picvault-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match err.log_level() {
            LogLevel::Debug => {
                tracing::debug!(error = %err, error_type = err.error_type(), "Request failed")
            }
            LogLevel::Warn => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Request failed")
            }
            LogLevel::Error => {
                tracing::error!(error = %err, error_type = err.error_type(), "Request failed")
            }
        }

        let response = match err {
            AppError::UpstreamNotFound => ErrorResponse {
                error: "image not found".to_string(),
                status_code: Some(404),
                body: None,
            },
            AppError::Upstream { status, body } => ErrorResponse {
                error: "Status code not 200".to_string(),
                status_code: Some(status),
                body: Some(body),
            },
            other => ErrorResponse {
                error: other.to_string(),
                status_code: None,
                body: None,
            },
        };

        (status, Json(response)).into_response()
    }
}
