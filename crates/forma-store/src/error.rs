//! # Store Error Types
//!
//! Failures at the Template Store boundary.
//!
//! ## Design Principles
//! 1. `TemplateNotFound` is the only failure the in-memory store produces:
//!    mutations auto-create, so only reads of never-touched ids can fail
//! 2. `Backend` exists for durable implementations (a database-backed
//!    store has connection failures to report); the contract stays the
//!    same for every backing
//! 3. Errors are local to one request and never fatal to the process

use thiserror::Error;

/// Template Store operation failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced template id has never been touched by a mutation.
    #[error("Template not found: {template_id}")]
    TemplateNotFound { template_id: String },

    /// The backing store failed (durable implementations only).
    #[error("Store backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Creates a TemplateNotFound error.
    pub fn not_found(template_id: impl Into<String>) -> Self {
        StoreError::TemplateNotFound {
            template_id: template_id.into(),
        }
    }

    /// Creates a Backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
