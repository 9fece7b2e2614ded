//! # API Error Type
//!
//! Unified error type for the boundary operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Forma                                 │
//! │                                                                         │
//! │  Caller                        Service                                  │
//! │  ──────                        ───────                                  │
//! │                                                                         │
//! │  validate_configuration(req)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Boundary Operation                                              │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing field? ── ValidationError::Required ──┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  Unknown template? ── StoreError ─────────── ApiError ─────────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rules violated? ── NOT an error: structured verdict ──────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Template not found: chair" }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local to one request. Nothing is retried and
//! nothing is fatal to the process.

use serde::Serialize;
use forma_core::ValidationError;
use forma_store::StoreError;

/// API error returned from boundary operations.
///
/// ## Serialization
/// This is what a transport shell would hand the caller on failure:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "templateId is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced template was never touched by a mutation (404)
    NotFound,

    /// A required request field is missing or empty (400)
    ValidationError,

    /// The store's backing failed (500)
    StoreError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TemplateNotFound { template_id } => {
                ApiError::not_found("Template", &template_id)
            }
            StoreError::Backend { message } => {
                // Log the actual failure but return a generic message
                tracing::error!("Store backend error: {}", message);
                ApiError::new(ErrorCode::StoreError, "Store operation failed")
            }
        }
    }
}

/// Converts input validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_conversion() {
        let err: ApiError = StoreError::not_found("chair").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Template not found: chair");
    }

    #[test]
    fn test_validation_conversion() {
        let err: ApiError = ValidationError::Required {
            field: "templateId".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "templateId is required");
    }

    #[test]
    fn test_error_code_wire_names() {
        let json = serde_json::to_string(&ErrorCode::ValidationError).unwrap();
        assert_eq!(json, "\"VALIDATION_ERROR\"");
    }
}
