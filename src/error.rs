use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
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

/// Application error taxonomy.
///
/// Every fallible path in the service funnels into one of these variants so
/// that callers (HTTP handlers, the admin CLI, background workers) can react
/// to the category rather than to backend-specific error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller supplied input that fails structural validation.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The requested mapping does not exist or is not resolvable.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Every code candidate in the attempt budget collided with an
    /// existing mapping.
    #[error("short code allocation exhausted after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    /// The backing store could not be reached or failed mid-operation.
    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
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
    pub fn allocation_exhausted(attempts: usize) -> Self {
        Self::AllocationExhausted { attempts }
    }
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::InvalidInput { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_input", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::AllocationExhausted { attempts } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "allocation_exhausted",
                format!("Short code allocation exhausted after {attempts} attempts"),
                json!({ "attempts": attempts }),
            ),
            // Backend detail is logged, never returned.
            AppError::StoreUnavailable { message } => {
                tracing::error!(error = %message, "store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "store_unavailable",
                    "Store temporarily unavailable".to_string(),
                    json!({}),
                )
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

/// Uniqueness conflicts never surface as errors from the store contract, so
/// anything sqlx reports is an availability problem.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::store_unavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::invalid_input("Request validation failed", details)
    }
}
