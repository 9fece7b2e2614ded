//! # forma-core: Pure Business Logic for the Forma Configurator
//!
//! This crate is the **heart** of Forma. It contains all configurator
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forma Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Service boundary (forma-service)                │   │
//! │  │   add_compatibility_rule, get_available_options,                │   │
//! │  │   validate_configuration, set_base_price, add_options           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ forma-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rules   │  │  filter   │  │ validate  │  │   │
//! │  │   │ Template  │  │ evaluator │  │ available │  │ verdict + │  │   │
//! │  │   │   Rule    │  │ violation │  │  options  │  │  pricing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 forma-store (Template Store)                    │   │
//! │  │         owns Template state, injectable backing                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Template, ChoiceOption, Rule, etc.)
//! - [`selection`] - Selection context (the caller's chosen choice ids)
//! - [`rules`] - Rule evaluator and rule violations
//! - [`filter`] - Option filtering against partial selections
//! - [`validate`] - Full-configuration validation and pricing
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use forma_core::{Rule, RuleType, SelectionContext};
//! use forma_core::rules::rule_satisfied;
//!
//! let rule = Rule::new(RuleType::Requires, "legs_wood", "finish_oak");
//!
//! // Primary not selected: the rule is vacuously satisfied
//! let empty = SelectionContext::default();
//! assert!(rule_satisfied(&rule, &empty));
//!
//! // Primary selected without secondary: violated
//! let partial = SelectionContext::from_choices(["legs_wood"]);
//! assert!(!rule_satisfied(&rule, &partial));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod rules;
pub mod selection;
pub mod types;
pub mod validate;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use forma_core::Rule` instead of
// `use forma_core::types::Rule`

pub use error::ValidationError;
pub use selection::SelectionContext;
pub use types::*;
pub use validate::ConfigurationVerdict;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of any caller-supplied identifier (template, category,
/// choice) or display name.
///
/// ## Business Reason
/// Identifiers are opaque caller-assigned strings; the only thing we
/// reject is unbounded input. Can be made configurable in future versions.
pub const MAX_IDENTIFIER_LENGTH: usize = 200;
