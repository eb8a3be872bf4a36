//! Error types for element resolution

use thiserror::Error;

/// Driver-level error surfaced by a [`PagePort`](crate::ports::PagePort)
/// implementation
#[derive(Debug, Error, Clone)]
pub enum PageError {
    /// The driver rejected the selector expression (malformed, unsupported)
    #[error("selector rejected: {0}")]
    SelectorRejected(String),

    /// The element handle no longer refers to a live node
    #[error("stale element: {0}")]
    StaleElement(String),

    /// The page itself is closed, crashed or navigated away for good
    #[error("page gone: {0}")]
    PageGone(String),

    /// Driver internal failure
    #[error("driver internal error: {0}")]
    Internal(String),
}

impl PageError {
    /// Fatal errors invalidate the "there is a live page to query"
    /// precondition; everything else is a per-candidate miss (or, for
    /// actions, a logged action failure).
    pub fn is_fatal(&self) -> bool {
        matches!(self, PageError::PageGone(_))
    }
}

/// Resolution error
///
/// `NotFound` is a value ([`Resolution::NotFound`](crate::types::Resolution)),
/// never an error; the only condition that surfaces here is a fatal driver
/// failure, after which no further resolution attempt can be meaningful.
#[derive(Debug, Error, Clone)]
pub enum LocatorError {
    /// The live page is no longer available
    #[error("page driver failure: {0}")]
    Page(#[from] PageError),
}
