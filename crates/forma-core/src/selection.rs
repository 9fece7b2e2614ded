//! # Selection Context
//!
//! The caller's current set of chosen choice ids, normalized for rule
//! evaluation and pricing.
//!
//! ## The Wire Encoding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Selection Context Normalization                        │
//! │                                                                         │
//! │  Callers submit a map of choice id → choice id where an entry whose     │
//! │  value echoes its key means "this choice is selected":                  │
//! │                                                                         │
//! │    { "legs_wood": "legs_wood",     ← selected                          │
//! │      "finish_oak": "something" }   ← NOT selected (value ≠ key)        │
//! │                                                                         │
//! │  Internally we convert that map once, at the core boundary, into a     │
//! │  plain set of selected ids:                                             │
//! │                                                                         │
//! │    { "legs_wood" }                                                      │
//! │                                                                         │
//! │  Every lookup after that point is a set-membership test, which          │
//! │  removes a whole class of "did you compare the value too?" bugs.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Non-echoing entries are silently treated as "not selected"; they are
//!   intentionally not an error (the external contract is permissive)
//! - The context is per-request and never persisted

use std::collections::{HashMap, HashSet};

/// The set of choice ids currently selected by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    selected: HashSet<String>,
}

impl SelectionContext {
    /// Builds a context from the caller's self-mapping encoding.
    ///
    /// Only entries whose value echoes their key count as selected; all
    /// other entries are dropped here, which means neither rule
    /// evaluation nor pricing ever sees them.
    pub fn from_map(selections: &HashMap<String, String>) -> Self {
        let selected = selections
            .iter()
            .filter(|(key, value)| key == value)
            .map(|(key, _)| key.clone())
            .collect();

        SelectionContext { selected }
    }

    /// Builds a context directly from choice ids. Mostly a test and demo
    /// convenience; boundary code goes through [`from_map`](Self::from_map).
    pub fn from_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectionContext {
            selected: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given choice id is selected.
    pub fn is_selected(&self, choice_id: &str) -> bool {
        self.selected.contains(choice_id)
    }

    /// Iterates the selected choice ids.
    ///
    /// Iteration order is unspecified; callers that need determinism
    /// (e.g. violation messages) must not depend on it. Pricing only sums,
    /// so order is irrelevant there.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Number of selected choices.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map_keeps_echoing_pairs() {
        let mut map = HashMap::new();
        map.insert("legs_wood".to_string(), "legs_wood".to_string());
        map.insert("finish_oak".to_string(), "finish_oak".to_string());

        let ctx = SelectionContext::from_map(&map);
        assert_eq!(ctx.len(), 2);
        assert!(ctx.is_selected("legs_wood"));
        assert!(ctx.is_selected("finish_oak"));
    }

    #[test]
    fn test_from_map_drops_non_echoing_pairs() {
        let mut map = HashMap::new();
        map.insert("legs_wood".to_string(), "legs_wood".to_string());
        // Value doesn't echo the key: treated as not selected, not an error
        map.insert("finish_oak".to_string(), "finish_walnut".to_string());

        let ctx = SelectionContext::from_map(&map);
        assert_eq!(ctx.len(), 1);
        assert!(ctx.is_selected("legs_wood"));
        assert!(!ctx.is_selected("finish_oak"));
        assert!(!ctx.is_selected("finish_walnut"));
    }

    #[test]
    fn test_empty_context() {
        let ctx = SelectionContext::from_map(&HashMap::new());
        assert!(ctx.is_empty());
        assert!(!ctx.is_selected("anything"));
    }
}
