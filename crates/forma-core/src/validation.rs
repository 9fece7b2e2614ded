//! # Validation Module
//!
//! Boundary input validation for the Forma configurator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Type validation (numbers are numbers, maps are maps)              │
//! │  └── Option<_> fields make "missing" representable                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present and non-empty                             │
//! │  └── Identifier length capped                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine semantics (rules, filter, validate)                   │
//! │  └── Deliberately permissive: ids are opaque, unknown ids are legal    │
//! │                                                                         │
//! │  Defense in depth: each layer catches a different class of error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are *opaque* caller-assigned strings by contract, so there
//! is intentionally no charset restriction here. Presence and a length
//! cap are the whole policy.

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_IDENTIFIER_LENGTH;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a required identifier field (template, category, choice id).
///
/// ## Rules
/// - Must be present (`Some`) and not blank (empty or whitespace-only)
/// - Must be at most [`MAX_IDENTIFIER_LENGTH`] characters
///
/// ## Returns
/// The identifier exactly as submitted. Identifiers are opaque, so no
/// trimming or other normalization is applied: `" chair "` and `"chair"`
/// are two distinct templates.
///
/// ## Example
/// ```rust
/// use forma_core::validation::validate_identifier;
///
/// assert_eq!(
///     validate_identifier("templateId", Some(" chair ")).unwrap(),
///     " chair "
/// );
/// assert!(validate_identifier("templateId", None).is_err());
/// assert!(validate_identifier("templateId", Some("   ")).is_err());
/// ```
pub fn validate_identifier(field: &str, value: Option<&str>) -> ValidationResult<String> {
    let value = value.unwrap_or_default();

    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_IDENTIFIER_LENGTH,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Presence Validators
// =============================================================================

/// Validates that a non-string required field (price, map, ...) is present.
///
/// ## Rules
/// - Must be `Some`; the value itself is not inspected
///
/// ## Example
/// ```rust
/// use forma_core::validation::validate_present;
///
/// assert_eq!(validate_present("basePrice", Some(100)).unwrap(), 100);
/// assert!(validate_present::<i64>("basePrice", None).is_err());
/// ```
pub fn validate_present<T>(field: &str, value: Option<T>) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
