//! # Error Types
//!
//! Domain-specific error types for forma-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  forma-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  forma-store errors (separate crate)                                   │
//! │  └── StoreError       - Template Store failures (not found, backend)   │
//! │                                                                         │
//! │  forma-service errors (boundary)                                       │
//! │  └── ApiError         - What callers see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError ──┐                                             │
//! │        StoreError ───────┴──► ApiError ──► Caller                      │
//! │                                                                         │
//! │  NOTE: a configuration that violates compatibility rules is NOT an     │
//! │  error. It is a structured verdict (ConfigurationVerdict::Invalid)     │
//! │  returned on the success path.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, values)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a boundary request doesn't meet requirements
/// (missing or empty fields, oversized identifiers). Used for early
/// validation before any store or rule logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
