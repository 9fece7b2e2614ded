//! # Option Filter
//!
//! Computes, for one target category, the catalog entries compatible with
//! the caller's current partial selections.
//!
//! ## Filtering Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Option Filtering                                   │
//! │                                                                         │
//! │  available_options(template, "finish", {legs_metal})                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category "finish" in template.options?                                 │
//! │       │ no  → empty list (absent category is not an error)              │
//! │       ▼ yes                                                             │
//! │  is EVERY rule satisfied against the submitted selections?              │
//! │       │   (every rule applies globally; rules are never scoped          │
//! │       │    to the queried category, and the catalog entries             │
//! │       │    themselves play no part in evaluation)                       │
//! │       │                                                                 │
//! │       ├── no  → empty list                                              │
//! │       └── yes → every OptionSummary { choice_id, name, price_delta }    │
//! │                                                                         │
//! │  Output order == catalog insertion order.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Template not found" is the store's concern, not this module's: by the
//! time a template value exists to pass in here, it was found.

use crate::rules::rule_satisfied;
use crate::selection::SelectionContext;
use crate::types::{OptionSummary, Template};

/// Lists the target category's options compatible with the current
/// partial selections.
///
/// A choice is retained iff every rule in the template's rule set is
/// satisfied when evaluated against `selections` exactly as submitted.
/// The candidate entry itself is not part of the evaluation, so a
/// category's entries pass or fail together: conflicting selections
/// empty every listing, consistent ones retain whole catalogs. Adding
/// rules to a template can therefore only shrink or preserve this
/// listing, never grow it.
///
/// An unknown category yields an empty list.
pub fn available_options(
    template: &Template,
    category_id: &str,
    selections: &SelectionContext,
) -> Vec<OptionSummary> {
    let Some(catalog) = template.category_options(category_id) else {
        return Vec::new();
    };

    let rules_hold = template
        .rules
        .iter()
        .all(|rule| rule_satisfied(rule, selections));
    if !rules_hold {
        return Vec::new();
    }

    catalog
        .iter()
        .map(|(choice_id, option)| OptionSummary::from_entry(choice_id, option))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryOptions, ChoiceOption, Rule, RuleType};

    /// A chair template with two leg options and two finish options.
    fn chair_template() -> Template {
        let mut template = Template::new("chair");

        let mut legs = CategoryOptions::new();
        legs.insert("legs_wood".to_string(), ChoiceOption::new("Wooden legs", 10));
        legs.insert("legs_metal".to_string(), ChoiceOption::new("Metal legs", 15));
        template.options.insert("legs".to_string(), legs);

        let mut finish = CategoryOptions::new();
        finish.insert("finish_oak".to_string(), ChoiceOption::new("Oak finish", 20));
        finish.insert(
            "finish_matte".to_string(),
            ChoiceOption::new("Matte finish", 5),
        );
        template.options.insert("finish".to_string(), finish);

        template
    }

    fn choice_ids(options: &[OptionSummary]) -> Vec<&str> {
        options.iter().map(|o| o.choice_id.as_str()).collect()
    }

    #[test]
    fn test_no_rules_returns_full_category_in_order() {
        let template = chair_template();
        let options = available_options(&template, "finish", &SelectionContext::default());

        assert_eq!(choice_ids(&options), vec!["finish_oak", "finish_matte"]);
        assert_eq!(options[0].name, "Oak finish");
        assert_eq!(options[0].price_delta_cents, 20);
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        let template = chair_template();
        let options = available_options(&template, "upholstery", &SelectionContext::default());
        assert!(options.is_empty());
    }

    #[test]
    fn test_unselected_secondary_is_retained() {
        let mut template = chair_template();
        template.rules.push(Rule::new(
            RuleType::IncompatibleWith,
            "legs_metal",
            "finish_oak",
        ));

        // finish_oak is not in the selections, so the rule holds and the
        // whole finish catalog stays listed, oak included
        let selections = SelectionContext::from_choices(["legs_metal"]);
        assert!(rule_satisfied(&template.rules[0], &selections));

        let options = available_options(&template, "finish", &selections);
        assert_eq!(choice_ids(&options), vec!["finish_oak", "finish_matte"]);
    }

    #[test]
    fn test_conflicting_selections_empty_every_listing() {
        let mut template = chair_template();
        template.rules.push(Rule::new(
            RuleType::IncompatibleWith,
            "legs_metal",
            "finish_oak",
        ));

        // Both conflicting choices already selected: every rule check
        // fails, so every category (not just the rule's) lists empty
        let selections = SelectionContext::from_choices(["legs_metal", "finish_oak"]);
        assert!(available_options(&template, "finish", &selections).is_empty());
        assert!(available_options(&template, "legs", &selections).is_empty());
    }

    #[test]
    fn test_unmet_requirement_empties_the_listing() {
        let mut template = chair_template();
        template.rules.push(Rule::new(
            RuleType::Requires,
            "legs_wood",
            "finish_oak",
        ));

        // legs_wood selected without its required finish: no entry of
        // any category survives the global rule check
        let selections = SelectionContext::from_choices(["legs_wood"]);
        assert!(available_options(&template, "finish", &selections).is_empty());

        // Once the requirement is met, full listings come back
        let selections = SelectionContext::from_choices(["legs_wood", "finish_oak"]);
        let options = available_options(&template, "finish", &selections);
        assert_eq!(choice_ids(&options), vec!["finish_oak", "finish_matte"]);
    }

    #[test]
    fn test_rule_naming_unknown_choice_never_triggers() {
        let mut template = chair_template();
        template.rules.push(Rule::new(
            RuleType::Requires,
            "cushion_velvet", // never added to any catalog
            "legs_wood",
        ));

        let options = available_options(&template, "finish", &SelectionContext::default());
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_more_rules_never_grow_the_listing() {
        let mut template = chair_template();
        let selections = SelectionContext::from_choices(["legs_metal", "finish_oak"]);

        let before = available_options(&template, "finish", &selections);

        template.rules.push(Rule::new(
            RuleType::IncompatibleWith,
            "legs_metal",
            "finish_oak",
        ));
        let after = available_options(&template, "finish", &selections);

        assert!(after.len() <= before.len());
        for option in &after {
            assert!(before.contains(option));
        }
    }
}
