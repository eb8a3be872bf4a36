//! Semantic element resolution with ranked candidate fallback
//!
//! Turns a semantic category (e.g. `login_button`) into a live, visible
//! element handle by trying the registry's candidate selectors strictly in
//! list order, with a bounded visibility budget per candidate:
//! - first visible match wins, later candidates are never tried
//! - a single candidate's failure (no match, rejected expression, never
//!   visible) is swallowed and the search continues
//! - only a fatal driver failure (the page itself is gone) propagates
//!
//! The driver sits behind [`PagePort`]; any automation backend that can query
//! elements, wait for visibility and perform click/fill/read-text can plug in.

pub mod errors;
pub mod ports;
pub mod resolver;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use errors::{LocatorError, PageError};
pub use ports::{ElementHandle, ElementMetadata, PagePort};
pub use resolver::{ElementResolver, ResolverConfig};
pub use types::{CandidateOutcome, MissReason, ResolvedElement, Resolution, TextMatch};
