pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing_error::SpanTrace;
use utoipa::ToSchema;

static EXPOSE_DIAGNOSTICS: AtomicBool = AtomicBool::new(false);

/// Controls whether 500 responses carry the captured diagnostic in `trace`.
///
/// Off by default. Binaries turn it on outside production.
pub fn set_expose_diagnostics(enabled: bool) {
    EXPOSE_DIAGNOSTICS.store(enabled, Ordering::Relaxed);
}

pub fn diagnostics_exposed() -> bool {
    EXPOSE_DIAGNOSTICS.load(Ordering::Relaxed)
}

/// Standard error response structure.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Invalid payload",
///   "details": { "errors": ["price must be a number"] }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Field errors, present only for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Diagnostic detail for internal errors, present only outside production
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("{message}: {}", .errors.join("; "))]
    ValidationFailed { message: String, errors: Vec<String> },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {diagnostic}")]
    InternalServerError { diagnostic: String },
}

impl AppError {
    /// Wrap an unexpected failure, recording the active span trace with it.
    pub fn internal(cause: impl Display) -> Self {
        let span_trace = SpanTrace::capture();
        AppError::InternalServerError {
            diagnostic: format!("{}\n{}", cause, span_trace),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::ValidationFailed { .. } => ErrorCode::ValidationError,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError { .. } => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details, trace) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(error_code = code.code(), "JSON extraction error: {:?}", e);
                (e.body_text(), None, None)
            }
            AppError::ValidationFailed { message, errors } => {
                tracing::info!(
                    error_code = code.code(),
                    errors = ?errors,
                    "Validation failed"
                );
                (message, Some(serde_json::json!({ "errors": errors })), None)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(error_code = code.code(), "Unauthorized: {}", msg);
                (msg, None, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None, None)
            }
            AppError::InternalServerError { diagnostic } => {
                tracing::error!(
                    error_code = code.code(),
                    "Internal server error: {}",
                    diagnostic
                );
                let trace = diagnostics_exposed().then_some(diagnostic);
                (code.default_message().to_string(), None, trace)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
            trace,
        });

        (status, body).into_response()
    }
}
