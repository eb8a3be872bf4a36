//! Priority-ordered selector registry
//!
//! Maps semantic element categories (e.g. `login_button`) to ordered lists of
//! candidate selector expressions, from most stable (test-automation
//! attributes) to least stable (positional guesses). List order is resolution
//! precedence and is only changed through the explicit extension API.

mod defaults;
pub mod registry;
pub mod types;

pub use registry::SelectorRegistry;
pub use types::{categories, CandidateSelector, InsertPriority, SelectorKind, SemanticCategory};
