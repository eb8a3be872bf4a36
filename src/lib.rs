//! Semantic Locator - priority-ordered element resolution
//!
//! Umbrella crate re-exporting the three layers:
//! - [`locator_registry`]: semantic categories mapped to priority-ordered
//!   candidate selector lists, with controlled extension
//! - [`locator_resolver`]: the resolution algorithm (first visible match
//!   wins, per-candidate misses swallowed, bounded waits) behind a
//!   driver-agnostic page port
//! - [`locator_actions`]: one-call semantic actions with falsy outcomes for
//!   ordinary absence
//!
//! ```no_run
//! use semantic_locator::prelude::*;
//! use std::sync::Arc;
//!
//! async fn login(page: Arc<dyn PagePort>) -> Result<bool, LocatorError> {
//!     let actions = SemanticActions::new(page);
//!     actions.fill("username_field", "alice").await?;
//!     actions.fill("password_field", "hunter2").await?;
//!     actions.click("login_button").await
//! }
//! ```

pub use locator_actions::{ActionConfig, SemanticActions};
pub use locator_registry::{
    categories, CandidateSelector, InsertPriority, SelectorKind, SelectorRegistry,
    SemanticCategory,
};
pub use locator_resolver::{
    CandidateOutcome, ElementHandle, ElementMetadata, ElementResolver, LocatorError, MissReason,
    PageError, PagePort, ResolvedElement, Resolution, ResolverConfig, TextMatch,
};

/// Common imports for resolver and facade users
pub mod prelude {
    pub use locator_actions::{ActionConfig, SemanticActions};
    pub use locator_registry::{CandidateSelector, InsertPriority, SelectorRegistry};
    pub use locator_resolver::{
        ElementResolver, LocatorError, PagePort, Resolution, ResolverConfig, TextMatch,
    };
}
