//! Application error taxonomy and HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors produced by the allocation and redirect core.
///
/// Validation errors are raised before any store call and never retried.
/// [`AppError::Store`] covers transient storage failures (connection loss,
/// timeouts); "row does not exist" is expressed through `Option` in the
/// store contract and surfaces here only as [`AppError::NotFound`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("target must be an absolute http:// or https:// URL")]
    InvalidTarget,

    #[error("code must be 6-8 alphanumeric characters")]
    InvalidCode { code: String },

    #[error("code '{code}' is already taken")]
    CodeTaken { code: String },

    #[error("no link found for code '{code}'")]
    NotFound { code: String },

    #[error("could not allocate a unique code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("storage failure")]
    Store(#[from] sqlx::Error),
}

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

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code, details) = match self {
            AppError::InvalidTarget => (StatusCode::BAD_REQUEST, "invalid_target", json!({})),
            AppError::InvalidCode { code } => (
                StatusCode::BAD_REQUEST,
                "invalid_code",
                json!({ "code": code }),
            ),
            AppError::CodeTaken { code } => {
                (StatusCode::CONFLICT, "code_taken", json!({ "code": code }))
            }
            AppError::NotFound { code } => {
                (StatusCode::NOT_FOUND, "not_found", json!({ "code": code }))
            }
            AppError::AllocationExhausted { attempts } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "allocation_exhausted",
                json!({ "attempts": attempts }),
            ),
            AppError::Store(e) => {
                tracing::error!("storage failure: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error", json!({}))
            }
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
