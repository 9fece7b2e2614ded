//! # Domain Types
//!
//! Core domain types used throughout the Forma configurator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Template                                 │   │
//! │  │  ───────────────────────────────────────────────────────────    │   │
//! │  │  id (caller-assigned)                                           │   │
//! │  │  base_price_cents                                               │   │
//! │  │  options:  category id ──► choice id ──► ChoiceOption           │   │
//! │  │  rules:    ordered Vec<Rule>                                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ChoiceOption   │   │      Rule       │   │    RuleType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  rule_type      │   │  Requires       │       │
//! │  │  price_delta    │   │  primary id     │   │  IncompatibleWith│      │
//! │  │    _cents       │   │  secondary id   │   │  Unknown        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Notes
//! - Template ids are caller-assigned opaque strings (no UUIDs generated here)
//! - A choice id is unique within its category's option map, not necessarily
//!   across categories or templates
//! - Rules reference choice ids without validating that they exist in any
//!   catalog; a rule naming an unknown choice simply never triggers

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Rule Type
// =============================================================================

/// The kind of directional constraint a [`Rule`] expresses.
///
/// ## Semantics
/// Both variants are conditional on the *primary* choice being selected;
/// if it is not, the rule is vacuously satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Selecting the primary choice requires the secondary to be selected too.
    Requires,
    /// Selecting the primary choice forbids selecting the secondary.
    IncompatibleWith,
    /// Any rule type this engine does not recognize.
    ///
    /// Unknown types are accepted at the boundary and stored, but they
    /// never block a configuration: the evaluator treats them as always
    /// satisfied. This keeps old engines tolerant of rules written by
    /// newer ones.
    #[serde(other)]
    Unknown,
}

impl RuleType {
    /// Parses a wire-format rule type name (`"REQUIRES"`,
    /// `"INCOMPATIBLE_WITH"`); anything else is [`RuleType::Unknown`].
    ///
    /// Total on purpose: the boundary rejects *missing* rule types, not
    /// unrecognized ones.
    pub fn parse(value: &str) -> RuleType {
        match value {
            "REQUIRES" => RuleType::Requires,
            "INCOMPATIBLE_WITH" => RuleType::IncompatibleWith,
            _ => RuleType::Unknown,
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A single directional compatibility constraint between two choices.
///
/// Rules are category-less on purpose: cross-category constraints
/// ("wood legs require oak finish") are the whole point of a configurator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rule {
    /// What kind of constraint this is.
    pub rule_type: RuleType,

    /// The choice whose selection triggers the constraint.
    pub primary_choice_id: String,

    /// The choice constrained by the primary's selection.
    pub secondary_choice_id: String,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(
        rule_type: RuleType,
        primary_choice_id: impl Into<String>,
        secondary_choice_id: impl Into<String>,
    ) -> Self {
        Rule {
            rule_type,
            primary_choice_id: primary_choice_id.into(),
            secondary_choice_id: secondary_choice_id.into(),
        }
    }
}

// =============================================================================
// Choice Option
// =============================================================================

/// A selectable option within one (template, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    /// Display name shown to the configuring user.
    pub name: String,

    /// Price delta in cents, added to the template's base price when
    /// this option's choice is selected. May be negative (discounts).
    pub price_delta_cents: i64,
}

impl ChoiceOption {
    /// Creates a new choice option.
    pub fn new(name: impl Into<String>, price_delta_cents: i64) -> Self {
        ChoiceOption {
            name: name.into(),
            price_delta_cents,
        }
    }
}

/// One category's option catalog: choice id → option, insertion-ordered.
///
/// Insertion order matters: available-option listings must come back in
/// the order options were registered.
pub type CategoryOptions = IndexMap<String, ChoiceOption>;

// =============================================================================
// Template
// =============================================================================

/// A configurable product definition.
///
/// ## Ownership
/// Templates are exclusively owned by the Template Store. The rule
/// evaluator, option filter, and configuration validator only ever read
/// cloned snapshots; none of them mutate a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    /// Caller-assigned identifier (unique within the store).
    pub id: String,

    /// Base price in cents. Defaults to 0 until explicitly set.
    pub base_price_cents: i64,

    /// Option catalogs, keyed by category id.
    pub options: IndexMap<String, CategoryOptions>,

    /// Compatibility rules, in insertion order.
    ///
    /// Evaluation order never changes the validity verdict, but it fixes
    /// the order of violation messages, so it must be preserved.
    pub rules: Vec<Rule>,

    /// When the template shell was first created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the template was last mutated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Creates an empty template shell: no options, no rules, base price 0.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Template {
            id: id.into(),
            base_price_cents: 0,
            options: IndexMap::new(),
            rules: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns one category's option catalog, if the category exists.
    pub fn category_options(&self, category_id: &str) -> Option<&CategoryOptions> {
        self.options.get(category_id)
    }

    /// Looks up a choice id across every category, in category insertion
    /// order, returning the first match.
    ///
    /// Choice ids are only guaranteed unique *within* a category; when the
    /// same id appears in several categories, the first category wins and
    /// the id is never matched twice (no double counting in pricing).
    pub fn find_option(&self, choice_id: &str) -> Option<&ChoiceOption> {
        self.options
            .values()
            .find_map(|category| category.get(choice_id))
    }
}

// =============================================================================
// Option Summary
// =============================================================================

/// A flattened catalog entry, as returned by available-option listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionSummary {
    /// The selectable choice id.
    pub choice_id: String,

    /// Display name.
    pub name: String,

    /// Price delta in cents.
    pub price_delta_cents: i64,
}

impl OptionSummary {
    /// Builds a summary from a catalog entry.
    pub fn from_entry(choice_id: &str, option: &ChoiceOption) -> Self {
        OptionSummary {
            choice_id: choice_id.to_string(),
            name: option.name.clone(),
            price_delta_cents: option.price_delta_cents,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
