//! # Configuration Validator
//!
//! Validates a complete selection set against every rule of a template
//! and, only when all rules hold, computes the total price.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Configuration Validation                               │
//! │                                                                         │
//! │  validate_configuration(template, selections)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  evaluate EVERY rule, in stored order                                   │
//! │       │                                                                 │
//! │       ├── any violated? ──► Invalid { violations }                      │
//! │       │                     (ordered messages, NO price computed)       │
//! │       │                                                                 │
//! │       └── all satisfied ──► Valid { total_price_cents }                 │
//! │                                                                         │
//! │  total = base price                                                     │
//! │        + Σ price_delta over each selected id that resolves to a        │
//! │          real option in SOME category (first category match wins,      │
//! │          each id counted exactly once)                                  │
//! │                                                                         │
//! │  Selected ids matching no catalog entry contribute zero, silently.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An invalid configuration is a normal, successful result of this
//! function. It is never surfaced as an error type.

use serde::Serialize;

use crate::rules::{collect_violations, RuleViolation};
use crate::selection::SelectionContext;
use crate::types::Template;

// =============================================================================
// Verdict
// =============================================================================

/// The structured outcome of validating a complete selection set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ConfigurationVerdict {
    /// Every rule holds; the configuration is priced.
    Valid {
        /// Base price plus the deltas of every priced selection, in cents.
        total_price_cents: i64,
    },

    /// At least one rule is violated; no price is computed.
    ///
    /// Violations appear in stored rule order. Duplicate rules produce
    /// duplicate violations (documented behavior, not a bug).
    Invalid { violations: Vec<RuleViolation> },
}

impl ConfigurationVerdict {
    /// Whether the configuration passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ConfigurationVerdict::Valid { .. })
    }

    /// The ordered human-readable violation messages (empty when valid).
    pub fn error_messages(&self) -> Vec<String> {
        match self {
            ConfigurationVerdict::Valid { .. } => Vec::new(),
            ConfigurationVerdict::Invalid { violations } => {
                violations.iter().map(RuleViolation::message).collect()
            }
        }
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validates `selections` against every rule of `template`, pricing the
/// configuration only if no rule is violated.
pub fn validate_configuration(
    template: &Template,
    selections: &SelectionContext,
) -> ConfigurationVerdict {
    let violations = collect_violations(&template.rules, selections);

    if !violations.is_empty() {
        return ConfigurationVerdict::Invalid { violations };
    }

    ConfigurationVerdict::Valid {
        total_price_cents: total_price(template, selections),
    }
}

/// Base price plus the price delta of every selected choice that resolves
/// to a catalog entry.
///
/// Each selected id is examined exactly once; ids that match no category
/// contribute zero rather than erroring (permissive by contract).
fn total_price(template: &Template, selections: &SelectionContext) -> i64 {
    let deltas: i64 = selections
        .iter()
        .filter_map(|choice_id| template.find_option(choice_id))
        .map(|option| option.price_delta_cents)
        .sum();

    template.base_price_cents + deltas
}

// =============================================================================
// Unit Tests
// =============================================================================
