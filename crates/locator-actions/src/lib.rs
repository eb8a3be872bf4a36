//! Semantic action facade
//!
//! One-call actions (click, fill, read text, visibility, wait-for-appearance)
//! on top of the element resolver. Ordinary absence and action-level races
//! come back as `false`/`None` with a warning log; only a fatal page failure
//! surfaces as an error. Callers that need to distinguish "didn't exist" from
//! "existed but the action failed" use the resolver directly.

pub mod facade;

pub use facade::{ActionConfig, SemanticActions};
