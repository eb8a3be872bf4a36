//! Driver-facing port for page queries and single-element actions

use crate::errors::PageError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque handle to a live element
///
/// Issued by the driver; the resolver never interprets `element_id` beyond
/// passing it back to the same driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-scoped element identity
    pub element_id: String,

    /// Optional diagnostics about the element
    #[serde(default)]
    pub metadata: ElementMetadata,
}

impl ElementHandle {
    /// Create a handle with empty metadata
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            metadata: ElementMetadata::default(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Element diagnostics reported by the driver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Element tag name
    pub tag_name: Option<String>,

    /// Element visible text
    pub visible_text: Option<String>,

    /// Element position in DOM (for disambiguation)
    pub dom_index: Option<usize>,
}

/// The four primitives the resolver requires from a browser automation driver
///
/// Selector expressions are opaque here: they are handed verbatim to
/// `query_all`, and the CSS/XPath/text-match distinction is the driver's
/// concern. Implementations must be safe to share across independent pages;
/// a single page handle is driven from one flow at a time.
#[async_trait]
pub trait PagePort: Send + Sync {
    /// All elements matching `selector` on the current page, in document
    /// order. An empty vec is a miss, not an error.
    async fn query_all(&self, selector: &str) -> Result<Vec<ElementHandle>, PageError>;

    /// Wait up to `timeout` for the element to become visible. Returns
    /// `Ok(false)` on timeout; must never block past `timeout`.
    async fn wait_visible(
        &self,
        element: &ElementHandle,
        timeout: Duration,
    ) -> Result<bool, PageError>;

    /// Click the element
    async fn click(&self, element: &ElementHandle) -> Result<(), PageError>;

    /// Replace the element's value with `value`
    async fn fill(&self, element: &ElementHandle, value: &str) -> Result<(), PageError>;

    /// Read the element's text content
    async fn read_text(&self, element: &ElementHandle) -> Result<String, PageError>;
}
