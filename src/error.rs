//! Application error taxonomy and HTTP response mapping.
//!
//! Every failure in the service is request-scoped and maps to one of the
//! [`AppError`] variants. Errors serialize to a uniform JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// Serialized error payload wrapper.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error information included in responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error type returned by services, repositories, and handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed input (400). `details` carries field-level information.
    Validation { message: String, details: Value },
    /// Missing, malformed, expired, or otherwise invalid credentials (401).
    ///
    /// All authentication sub-reasons collapse into this variant so the
    /// response does not reveal which check failed.
    Unauthorized { message: String, details: Value },
    /// Unknown code or account (404).
    NotFound { message: String, details: Value },
    /// Unique-constraint style rejection (409).
    Conflict { message: String, details: Value },
    /// Unexpected failure (500).
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
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

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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

    /// Returns true for a unique-violation conflict on the links code column.
    ///
    /// The creation flow uses this to distinguish a retriable short-code
    /// collision from other conflicts.
    pub fn is_code_collision(&self) -> bool {
        match self {
            Self::Conflict { details, .. } => {
                details.get("constraint").and_then(Value::as_str) == Some("links_code_key")
            }
            _ => false,
        }
    }

    /// Converts this error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::Unauthorized { message, details } => ("unauthorized", message, details),
            Self::NotFound { message, details } => ("not_found", message, details),
            Self::Conflict { message, details } => ("conflict", message, details),
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { message, .. } => write!(f, "Validation error: {}", message),
            Self::Unauthorized { message, .. } => write!(f, "Unauthorized: {}", message),
            Self::NotFound { message, .. } => write!(f, "Not found: {}", message),
            Self::Conflict { message, .. } => write!(f, "Conflict: {}", message),
            Self::Internal { message, .. } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        if status == StatusCode::UNAUTHORIZED {
            // RFC 6750: 401 responses advertise the expected auth scheme.
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request body", details)
    }
}
