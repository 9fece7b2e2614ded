//! # Rule Evaluator
//!
//! The shared constraint-checking logic used by both option filtering and
//! full-configuration validation.
//!
//! ## Evaluation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rule Evaluation                                   │
//! │                                                                         │
//! │  rule_satisfied(rule, selections)                                       │
//! │       │                                                                 │
//! │       ├── primary NOT selected? ──────────► satisfied (vacuous)         │
//! │       │                                                                 │
//! │       ├── REQUIRES:          secondary selected?     → satisfied        │
//! │       │                      secondary not selected? → violated         │
//! │       │                                                                 │
//! │       ├── INCOMPATIBLE_WITH: secondary selected?     → violated         │
//! │       │                      secondary not selected? → satisfied        │
//! │       │                                                                 │
//! │       └── unknown type ───────────────────► satisfied (never blocks)    │
//! │                                                                         │
//! │  Total and deterministic: never fails, never mutates.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edge Cases
//! - A rule may reference a choice no catalog contains; no selection can
//!   ever match it, so the rule is simply never triggered
//! - Self-referential rules fall out of the definitions:
//!   `REQUIRES(a, a)` is always satisfied, `INCOMPATIBLE_WITH(a, a)` is
//!   violated the moment `a` is selected

use std::fmt;

use serde::Serialize;

use crate::selection::SelectionContext;
use crate::types::{Rule, RuleType};

// =============================================================================
// Evaluator
// =============================================================================

/// Whether a single rule holds against the given selections.
///
/// Pure, total, deterministic: the shared primitive behind both the
/// option filter and the configuration validator.
pub fn rule_satisfied(rule: &Rule, selections: &SelectionContext) -> bool {
    // Both rule types are conditional on the primary being selected
    if !selections.is_selected(&rule.primary_choice_id) {
        return true;
    }

    match rule.rule_type {
        RuleType::Requires => selections.is_selected(&rule.secondary_choice_id),
        RuleType::IncompatibleWith => !selections.is_selected(&rule.secondary_choice_id),
        // Unrecognized rule types never block
        RuleType::Unknown => true,
    }
}

// =============================================================================
// Rule Violation
// =============================================================================

/// A rule that a concrete selection set fails to satisfy.
///
/// Violations are results, not errors: the validator collects every one
/// of them, in stored rule order, and hands them back as a structured
/// verdict. Duplicate rules yield duplicate violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// The violated rule, verbatim.
    pub rule: Rule,
}

impl RuleViolation {
    /// Wraps a violated rule.
    pub fn new(rule: Rule) -> Self {
        RuleViolation { rule }
    }

    /// The human-readable violation message, e.g.
    /// `"legs_wood" requires "finish_oak"`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = &self.rule.primary_choice_id;
        let secondary = &self.rule.secondary_choice_id;

        match self.rule.rule_type {
            RuleType::Requires => write!(f, "\"{}\" requires \"{}\"", primary, secondary),
            RuleType::IncompatibleWith => {
                write!(f, "\"{}\" is incompatible with \"{}\"", primary, secondary)
            }
            // Unknown rules never violate, so this arm only exists to keep
            // Display total
            RuleType::Unknown => {
                write!(f, "\"{}\" conflicts with \"{}\"", primary, secondary)
            }
        }
    }
}

/// Collects every violated rule, in stored order.
pub fn collect_violations(rules: &[Rule], selections: &SelectionContext) -> Vec<RuleViolation> {
    rules
        .iter()
        .filter(|rule| !rule_satisfied(rule, selections))
        .map(|rule| RuleViolation::new(rule.clone()))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn requires(primary: &str, secondary: &str) -> Rule {
        Rule::new(RuleType::Requires, primary, secondary)
    }

    fn incompatible(primary: &str, secondary: &str) -> Rule {
        Rule::new(RuleType::IncompatibleWith, primary, secondary)
    }

    #[test]
    fn test_vacuous_when_primary_not_selected() {
        let selections = SelectionContext::from_choices(["finish_oak"]);

        // Every rule type is vacuously satisfied when its primary is absent
        assert!(rule_satisfied(&requires("legs_wood", "finish_oak"), &selections));
        assert!(rule_satisfied(&incompatible("legs_wood", "finish_oak"), &selections));
        assert!(rule_satisfied(
            &Rule::new(RuleType::Unknown, "legs_wood", "finish_oak"),
            &selections
        ));
    }

    #[test]
    fn test_requires_semantics() {
        let rule = requires("legs_wood", "finish_oak");

        let only_primary = SelectionContext::from_choices(["legs_wood"]);
        assert!(!rule_satisfied(&rule, &only_primary));

        let both = SelectionContext::from_choices(["legs_wood", "finish_oak"]);
        assert!(rule_satisfied(&rule, &both));
    }

    #[test]
    fn test_incompatible_semantics() {
        let rule = incompatible("legs_metal", "finish_oak");

        let only_primary = SelectionContext::from_choices(["legs_metal"]);
        assert!(rule_satisfied(&rule, &only_primary));

        let both = SelectionContext::from_choices(["legs_metal", "finish_oak"]);
        assert!(!rule_satisfied(&rule, &both));
    }

    #[test]
    fn test_unknown_rule_type_never_blocks() {
        let rule = Rule::new(RuleType::Unknown, "a", "b");
        let selections = SelectionContext::from_choices(["a", "b"]);
        assert!(rule_satisfied(&rule, &selections));
    }

    #[test]
    fn test_self_referential_rules() {
        let selections = SelectionContext::from_choices(["a"]);

        // REQUIRES(a, a): a is its own secondary, always satisfiable
        assert!(rule_satisfied(&requires("a", "a"), &selections));

        // INCOMPATIBLE_WITH(a, a): selecting a violates it immediately
        assert!(!rule_satisfied(&incompatible("a", "a"), &selections));
    }

    #[test]
    fn test_violation_messages() {
        let violation = RuleViolation::new(requires("legs_wood", "finish_oak"));
        assert_eq!(violation.message(), "\"legs_wood\" requires \"finish_oak\"");

        let violation = RuleViolation::new(incompatible("legs_metal", "finish_oak"));
        assert_eq!(
            violation.message(),
            "\"legs_metal\" is incompatible with \"finish_oak\""
        );
    }

    #[test]
    fn test_collect_violations_preserves_rule_order() {
        let rules = vec![
            requires("a", "b"),
            incompatible("a", "c"),
            requires("a", "d"),
        ];
        let selections = SelectionContext::from_choices(["a", "c"]);

        let violations = collect_violations(&rules, &selections);
        let messages: Vec<String> = violations.iter().map(RuleViolation::message).collect();

        assert_eq!(
            messages,
            vec![
                "\"a\" requires \"b\"",
                "\"a\" is incompatible with \"c\"",
                "\"a\" requires \"d\"",
            ]
        );
    }

    #[test]
    fn test_duplicate_rules_violate_twice() {
        let rules = vec![requires("a", "b"), requires("a", "b")];
        let selections = SelectionContext::from_choices(["a"]);

        let violations = collect_violations(&rules, &selections);
        assert_eq!(violations.len(), 2);
    }
}
