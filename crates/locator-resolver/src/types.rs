//! Resolution outcome types

use crate::errors::PageError;
use crate::ports::ElementHandle;
use locator_registry::{CandidateSelector, SemanticCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of resolving a semantic category against a live page
///
/// Either exactly one visible element (the first candidate that matched and
/// was visible) or `NotFound` — never a list of matches. `NotFound` is an
/// ordinary, expected value; calling code decides whether absence is itself
/// a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Resolution {
    /// A candidate matched a visible element
    Found(ResolvedElement),

    /// Every candidate missed
    NotFound,
}

impl Resolution {
    /// Check whether resolution succeeded
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Get the resolved element, if any
    pub fn element(&self) -> Option<&ResolvedElement> {
        match self {
            Resolution::Found(found) => Some(found),
            Resolution::NotFound => None,
        }
    }

    /// Consume into the resolved element, if any
    pub fn into_element(self) -> Option<ResolvedElement> {
        match self {
            Resolution::Found(found) => Some(found),
            Resolution::NotFound => None,
        }
    }
}

/// A successfully resolved element with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedElement {
    /// Live element handle
    pub handle: ElementHandle,

    /// Category that was resolved
    pub category: SemanticCategory,

    /// The candidate that won
    pub selector: CandidateSelector,

    /// Position of the winning candidate in the registry list
    pub candidate_index: usize,
}

/// How text-filtered resolution compares element text against the needle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMatch {
    /// Case-insensitive substring match
    Contains,

    /// Trimmed, case-sensitive equality
    Exact,
}

impl TextMatch {
    pub(crate) fn matches(&self, text: &str, needle: &str) -> bool {
        match self {
            TextMatch::Contains => text.to_lowercase().contains(&needle.to_lowercase()),
            TextMatch::Exact => text.trim() == needle.trim(),
        }
    }
}

/// Per-candidate classification inside the resolution loop
///
/// A closed variant instead of generic error catching: a miss continues the
/// search, a visible hit ends it, a fatal driver failure aborts it.
#[derive(Debug)]
pub enum CandidateOutcome {
    /// Candidate matched and the element is visible
    Visible(ElementHandle),

    /// Candidate missed; the search continues
    Miss(MissReason),

    /// Driver failure that invalidates further attempts
    Fatal(PageError),
}

/// Why a single candidate missed
#[derive(Debug, Clone)]
pub enum MissReason {
    /// Expression matched zero elements
    NoMatch,

    /// Driver rejected the query or the handle went stale mid-check
    Rejected(String),

    /// Matched, but never became visible within the budget
    NeverVisible,

    /// Matched, but no element's text satisfied the filter
    TextMismatch,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::NoMatch => f.write_str("no match"),
            MissReason::Rejected(reason) => write!(f, "rejected: {reason}"),
            MissReason::NeverVisible => f.write_str("never became visible"),
            MissReason::TextMismatch => f.write_str("text mismatch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_match_contains_is_case_insensitive() {
        assert!(TextMatch::Contains.matches("Welcome back, Alice", "alice"));
        assert!(!TextMatch::Contains.matches("Welcome back", "alice"));
    }

    #[test]
    fn text_match_exact_trims() {
        assert!(TextMatch::Exact.matches("  Login  ", "Login"));
        assert!(!TextMatch::Exact.matches("login", "Login"));
    }

    #[test]
    fn resolution_accessors() {
        let not_found = Resolution::NotFound;
        assert!(!not_found.is_found());
        assert!(not_found.element().is_none());
        assert!(not_found.into_element().is_none());
    }
}
