use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Request-terminal failures. Each variant maps to one HTTP status and carries
/// a fixed user-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    NotImplemented { message: String, details: Value },
    #[error("{message}")]
    UpstreamLookupFailure { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn not_implemented(message: impl Into<String>, details: Value) -> Self {
        Self::NotImplemented {
            message: message.into(),
            details,
        }
    }
    pub fn upstream_lookup_failure(message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamLookupFailure {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            AppError::UpstreamLookupFailure { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::NotFound { .. } => "not_found",
            AppError::NotImplemented { .. } => "not_implemented",
            AppError::UpstreamLookupFailure { .. } => "upstream_lookup_failure",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::BadRequest { message, details }
            | AppError::NotFound { message, details }
            | AppError::NotImplemented { message, details }
            | AppError::UpstreamLookupFailure { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Shorthand for an empty `details` object.
pub fn no_details() -> Value {
    json!({})
}
