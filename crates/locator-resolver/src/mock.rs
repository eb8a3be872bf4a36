//! In-memory page double for exercising the resolver without a browser
//!
//! Scripted per selector expression: install elements, mark expressions as
//! rejected, mark elements as stale, or close the page entirely. Mutations
//! are allowed while a resolution is in flight, which lets tests model
//! late-appearing elements for `wait_for_appearance`.

use crate::errors::PageError;
use crate::ports::{ElementHandle, ElementMetadata, PagePort};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::time::sleep;

/// Scripted element on a [`MockPage`]
#[derive(Debug, Clone)]
pub struct MockElement {
    pub id: String,
    pub visible: bool,
    pub text: String,
}

impl MockElement {
    /// A visible element
    pub fn visible(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: true,
            text: String::new(),
        }
    }

    /// An element that never becomes visible
    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            text: String::new(),
        }
    }

    /// Set the element's text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[derive(Default)]
struct PageState {
    elements: HashMap<String, Vec<MockElement>>,
    rejected: HashSet<String>,
    stale: HashSet<String>,
    gone: bool,
    clicks: Vec<String>,
    fills: Vec<(String, String)>,
    queries: usize,
}

/// In-memory [`PagePort`] implementation
#[derive(Default)]
pub struct MockPage {
    state: Mutex<PageState>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the elements a selector expression matches, in document order
    pub fn install(&self, selector: &str, elements: Vec<MockElement>) {
        self.state
            .lock()
            .elements
            .insert(selector.to_string(), elements);
    }

    /// Make the driver reject a selector expression
    pub fn reject(&self, selector: &str) {
        self.state.lock().rejected.insert(selector.to_string());
    }

    /// Make actions on an element fail as stale
    pub fn mark_stale(&self, element_id: &str) {
        self.state.lock().stale.insert(element_id.to_string());
    }

    /// Simulate the page going away; every subsequent call fails fatally
    pub fn close(&self) {
        self.state.lock().gone = true;
    }

    /// Element ids clicked so far
    pub fn clicks(&self) -> Vec<String> {
        self.state.lock().clicks.clone()
    }

    /// (element id, value) pairs filled so far
    pub fn fills(&self) -> Vec<(String, String)> {
        self.state.lock().fills.clone()
    }

    /// Number of `query_all` calls served
    pub fn query_count(&self) -> usize {
        self.state.lock().queries
    }

    fn lookup(&self, element_id: &str) -> Result<MockElement, PageError> {
        let state = self.state.lock();
        if state.gone {
            return Err(PageError::PageGone("page closed".to_string()));
        }
        state
            .elements
            .values()
            .flatten()
            .find(|element| element.id == element_id)
            .cloned()
            .ok_or_else(|| PageError::StaleElement(element_id.to_string()))
    }

    fn check_actionable(&self, element_id: &str) -> Result<MockElement, PageError> {
        if self.state.lock().stale.contains(element_id) {
            return Err(PageError::StaleElement(element_id.to_string()));
        }
        self.lookup(element_id)
    }
}

fn to_handle(element: &MockElement, dom_index: usize) -> ElementHandle {
    ElementHandle::new(&element.id).with_metadata(ElementMetadata {
        tag_name: None,
        visible_text: (!element.text.is_empty()).then(|| element.text.clone()),
        dom_index: Some(dom_index),
    })
}

#[async_trait]
impl PagePort for MockPage {
    async fn query_all(&self, selector: &str) -> Result<Vec<ElementHandle>, PageError> {
        let mut state = self.state.lock();
        state.queries += 1;
        if state.gone {
            return Err(PageError::PageGone("page closed".to_string()));
        }
        if state.rejected.contains(selector) {
            return Err(PageError::SelectorRejected(selector.to_string()));
        }
        Ok(state
            .elements
            .get(selector)
            .map(|elements| {
                elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| to_handle(element, index))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn wait_visible(
        &self,
        element: &ElementHandle,
        timeout: Duration,
    ) -> Result<bool, PageError> {
        if self.lookup(&element.element_id)?.visible {
            return Ok(true);
        }
        // Visibility may be flipped by another task while we wait
        sleep(timeout).await;
        Ok(self.lookup(&element.element_id)?.visible)
    }

    async fn click(&self, element: &ElementHandle) -> Result<(), PageError> {
        self.check_actionable(&element.element_id)?;
        self.state.lock().clicks.push(element.element_id.clone());
        Ok(())
    }

    async fn fill(&self, element: &ElementHandle, value: &str) -> Result<(), PageError> {
        self.check_actionable(&element.element_id)?;
        self.state
            .lock()
            .fills
            .push((element.element_id.clone(), value.to_string()));
        Ok(())
    }

    async fn read_text(&self, element: &ElementHandle) -> Result<String, PageError> {
        Ok(self.lookup(&element.element_id)?.text)
    }
}
