//! Selector registry with controlled extension

use crate::defaults::builtin_table;
use crate::types::{CandidateSelector, InsertPriority, SemanticCategory};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::info;

/// Registry of priority-ordered candidate selectors per semantic category
///
/// Built once from the built-in table (or empty for bespoke setups) and
/// extended, never replaced, through [`SelectorRegistry::add_candidates`].
/// Read on every resolution call; extension is expected at setup time, before
/// resolution begins.
#[derive(Debug, Clone)]
pub struct SelectorRegistry {
    map: HashMap<SemanticCategory, Vec<CandidateSelector>>,
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SelectorRegistry {
    /// Create a registry pre-loaded with the built-in selector table
    pub fn builtin() -> Self {
        Self {
            map: builtin_table(),
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Get the ordered candidate list for a category
    ///
    /// Unknown categories yield an empty slice, not an error: callers treat
    /// empty as "nothing to try".
    pub fn candidates(&self, category: &str) -> &[CandidateSelector] {
        self.map
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the registry has candidates for a category
    pub fn contains(&self, category: &str) -> bool {
        self.map.contains_key(category)
    }

    /// Iterate over all known categories
    pub fn categories(&self) -> impl Iterator<Item = &SemanticCategory> {
        self.map.keys()
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Add candidates for a category at the given insertion point
    ///
    /// `High` prepends (tried first), `Low` appends (tried last), `Medium`
    /// splices into the midpoint of the existing list. An unknown category is
    /// created with exactly the given candidates regardless of priority.
    /// Inserting the same candidate twice duplicates it; that is accepted,
    /// not an error.
    pub fn add_candidates(
        &mut self,
        category: impl Into<SemanticCategory>,
        candidates: Vec<CandidateSelector>,
        priority: InsertPriority,
    ) {
        let category = category.into();
        let count = candidates.len();

        match self.map.entry(category.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidates);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                match priority {
                    InsertPriority::High => {
                        existing.splice(0..0, candidates);
                    }
                    InsertPriority::Medium => {
                        let mid = existing.len() / 2;
                        existing.splice(mid..mid, candidates);
                    }
                    InsertPriority::Low => {
                        existing.extend(candidates);
                    }
                }
            }
        }

        info!(
            "Added {} custom selectors for {} with {} priority",
            count,
            category,
            priority.name()
        );
    }

    /// Convenience wrapper over [`add_candidates`](Self::add_candidates) for
    /// raw expression strings
    pub fn add_expressions(
        &mut self,
        category: impl Into<SemanticCategory>,
        expressions: &[&str],
        priority: InsertPriority,
    ) {
        let candidates = expressions
            .iter()
            .map(|expr| CandidateSelector::new(*expr))
            .collect();
        self.add_candidates(category, candidates, priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exprs(list: &[CandidateSelector]) -> Vec<&str> {
        list.iter().map(|c| c.expression.as_str()).collect()
    }

    #[test]
    fn unknown_category_yields_empty_slice() {
        let registry = SelectorRegistry::builtin();
        assert!(registry.candidates("no_such_category").is_empty());
    }

    #[test]
    fn reads_are_idempotent() {
        let registry = SelectorRegistry::builtin();
        let first: Vec<_> = registry.candidates("login_button").to_vec();
        let second: Vec<_> = registry.candidates("login_button").to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn extension_ordering_high_then_low() {
        let mut registry = SelectorRegistry::empty();
        registry.add_expressions("cat", &["a", "b"], InsertPriority::Low);
        registry.add_expressions("cat", &["x"], InsertPriority::High);
        registry.add_expressions("cat", &["y"], InsertPriority::Low);
        assert_eq!(exprs(registry.candidates("cat")), vec!["x", "a", "b", "y"]);
    }

    #[test]
    fn medium_splices_at_midpoint() {
        let mut registry = SelectorRegistry::empty();
        registry.add_expressions("cat", &["a", "b", "c", "d"], InsertPriority::Low);
        registry.add_expressions("cat", &["m"], InsertPriority::Medium);
        assert_eq!(
            exprs(registry.candidates("cat")),
            vec!["a", "b", "m", "c", "d"]
        );
    }

    #[test]
    fn new_category_created_regardless_of_priority() {
        for priority in [
            InsertPriority::High,
            InsertPriority::Medium,
            InsertPriority::Low,
        ] {
            let mut registry = SelectorRegistry::empty();
            registry.add_expressions("fresh", &["one", "two"], priority);
            assert_eq!(exprs(registry.candidates("fresh")), vec!["one", "two"]);
        }
    }

    #[test]
    fn duplicate_insertion_is_accepted() {
        let mut registry = SelectorRegistry::empty();
        registry.add_expressions("cat", &["a"], InsertPriority::Low);
        registry.add_expressions("cat", &["a"], InsertPriority::Low);
        assert_eq!(exprs(registry.candidates("cat")), vec!["a", "a"]);
    }

    #[test]
    fn builtin_extension_prepends_before_defaults() {
        let mut registry = SelectorRegistry::builtin();
        let default_first = registry.candidates("login_button")[0].clone();
        registry.add_expressions("login_button", &["[data-qa='login']"], InsertPriority::High);
        let list = registry.candidates("login_button");
        assert_eq!(list[0].expression, "[data-qa='login']");
        assert_eq!(list[1], default_first);
    }
}
