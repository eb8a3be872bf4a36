//! Resolve-then-act convenience operations

use locator_registry::{CandidateSelector, InsertPriority, SemanticCategory};
use locator_resolver::{
    ElementResolver, LocatorError, PagePort, ResolvedElement, Resolution, TextMatch,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Facade timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Per-candidate visibility budget for resolution-backed actions
    pub timeout_per_candidate: Duration,

    /// Aggregate budget for [`SemanticActions::wait_for_appearance`]
    pub appearance_timeout: Duration,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            timeout_per_candidate: Duration::from_secs(5),
            appearance_timeout: Duration::from_secs(10),
        }
    }
}

/// Semantic actions over a live page
///
/// Every operation follows the same shape: resolve the category, and on
/// `NotFound` return the falsy outcome with a warning naming the category;
/// otherwise perform the single requested action, converting action-level
/// failures (e.g. the element went stale between resolution and the click)
/// into the same falsy outcome. Fatal page loss is the one condition that
/// propagates as `Err`.
pub struct SemanticActions {
    resolver: ElementResolver,
    config: ActionConfig,
}

impl SemanticActions {
    /// Create a facade over the built-in selector table
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self::with_resolver(ElementResolver::new(page))
    }

    /// Create a facade over a caller-configured resolver
    pub fn with_resolver(resolver: ElementResolver) -> Self {
        Self {
            resolver,
            config: ActionConfig::default(),
        }
    }

    /// Override the facade timeouts
    pub fn with_config(mut self, config: ActionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resolver(&self) -> &ElementResolver {
        &self.resolver
    }

    /// Mutable resolver access for setup-time registry extension
    pub fn resolver_mut(&mut self) -> &mut ElementResolver {
        &mut self.resolver
    }

    /// Extend the selector registry; expected before resolution begins
    pub fn add_candidates(
        &mut self,
        category: impl Into<SemanticCategory>,
        candidates: Vec<CandidateSelector>,
        priority: InsertPriority,
    ) {
        self.resolver.add_candidates(category, candidates, priority);
    }

    /// Click the element for a category
    pub async fn click(&self, category: &str) -> Result<bool, LocatorError> {
        self.click_with_timeout(category, self.config.timeout_per_candidate)
            .await
    }

    pub async fn click_with_timeout(
        &self,
        category: &str,
        timeout: Duration,
    ) -> Result<bool, LocatorError> {
        let Some(found) = self.resolve_or_warn(category, timeout).await? else {
            return Ok(false);
        };
        self.do_click(category, &found).await
    }

    /// Fill the element for a category with `value`
    pub async fn fill(&self, category: &str, value: &str) -> Result<bool, LocatorError> {
        self.fill_with_timeout(category, value, self.config.timeout_per_candidate)
            .await
    }

    pub async fn fill_with_timeout(
        &self,
        category: &str,
        value: &str,
        timeout: Duration,
    ) -> Result<bool, LocatorError> {
        let Some(found) = self.resolve_or_warn(category, timeout).await? else {
            return Ok(false);
        };
        match self.resolver.page().fill(&found.handle, value).await {
            Ok(()) => {
                info!("Filled {}", category);
                Ok(true)
            }
            Err(err) if err.is_fatal() => Err(err.into()),
            Err(err) => {
                warn!("Failed to fill {}: {}", category, err);
                Ok(false)
            }
        }
    }

    /// Read the text content of the element for a category
    pub async fn get_text(&self, category: &str) -> Result<Option<String>, LocatorError> {
        self.get_text_with_timeout(category, self.config.timeout_per_candidate)
            .await
    }

    pub async fn get_text_with_timeout(
        &self,
        category: &str,
        timeout: Duration,
    ) -> Result<Option<String>, LocatorError> {
        let Some(found) = self.resolve_or_warn(category, timeout).await? else {
            return Ok(None);
        };
        self.do_read_text(category, &found).await
    }

    /// Whether the element for a category is currently visible
    pub async fn is_visible(&self, category: &str) -> Result<bool, LocatorError> {
        let resolution = self
            .resolver
            .resolve(category, self.config.timeout_per_candidate)
            .await?;
        Ok(resolution.is_found())
    }

    /// Wait up to the configured aggregate budget for the category to appear
    pub async fn wait_for_appearance(&self, category: &str) -> Result<bool, LocatorError> {
        self.wait_for_appearance_within(category, self.config.appearance_timeout)
            .await
    }

    pub async fn wait_for_appearance_within(
        &self,
        category: &str,
        timeout: Duration,
    ) -> Result<bool, LocatorError> {
        let appeared = self.resolver.wait_for_appearance(category, timeout).await?;
        if !appeared {
            warn!("Element {} did not appear within {:?}", category, timeout);
        }
        Ok(appeared)
    }

    /// Click the element for a category whose text contains `text`
    pub async fn click_by_text(&self, category: &str, text: &str) -> Result<bool, LocatorError> {
        let Some(found) = self.resolve_by_text_or_warn(category, text).await? else {
            return Ok(false);
        };
        self.do_click(category, &found).await
    }

    /// Whether a category element whose text contains `text` is visible
    pub async fn is_visible_by_text(
        &self,
        category: &str,
        text: &str,
    ) -> Result<bool, LocatorError> {
        let resolution = self
            .resolver
            .resolve_with_text(
                category,
                text,
                TextMatch::Contains,
                self.config.timeout_per_candidate,
            )
            .await?;
        Ok(resolution.is_found())
    }

    /// Read the text of a category element whose text contains `text`
    pub async fn get_text_by_text(
        &self,
        category: &str,
        text: &str,
    ) -> Result<Option<String>, LocatorError> {
        let Some(found) = self.resolve_by_text_or_warn(category, text).await? else {
            return Ok(None);
        };
        self.do_read_text(category, &found).await
    }

    async fn resolve_or_warn(
        &self,
        category: &str,
        timeout: Duration,
    ) -> Result<Option<ResolvedElement>, LocatorError> {
        match self.resolver.resolve(category, timeout).await? {
            Resolution::Found(found) => Ok(Some(found)),
            Resolution::NotFound => {
                warn!("Could not resolve element for category: {}", category);
                Ok(None)
            }
        }
    }

    async fn resolve_by_text_or_warn(
        &self,
        category: &str,
        text: &str,
    ) -> Result<Option<ResolvedElement>, LocatorError> {
        let resolution = self
            .resolver
            .resolve_with_text(
                category,
                text,
                TextMatch::Contains,
                self.config.timeout_per_candidate,
            )
            .await?;
        match resolution {
            Resolution::Found(found) => Ok(Some(found)),
            Resolution::NotFound => {
                warn!(
                    "Could not resolve element for category {} with text: {}",
                    category, text
                );
                Ok(None)
            }
        }
    }

    async fn do_click(
        &self,
        category: &str,
        found: &ResolvedElement,
    ) -> Result<bool, LocatorError> {
        match self.resolver.page().click(&found.handle).await {
            Ok(()) => {
                info!("Clicked {}", category);
                Ok(true)
            }
            Err(err) if err.is_fatal() => Err(err.into()),
            Err(err) => {
                warn!("Failed to click {}: {}", category, err);
                Ok(false)
            }
        }
    }

    async fn do_read_text(
        &self,
        category: &str,
        found: &ResolvedElement,
    ) -> Result<Option<String>, LocatorError> {
        match self.resolver.page().read_text(&found.handle).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.is_fatal() => Err(err.into()),
            Err(err) => {
                warn!("Failed to read text from {}: {}", category, err);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locator_registry::SelectorRegistry;
    use locator_resolver::mock::{MockElement, MockPage};

    fn actions_with(
        page: Arc<MockPage>,
        setup: impl FnOnce(&mut SelectorRegistry),
    ) -> SemanticActions {
        let mut registry = SelectorRegistry::empty();
        setup(&mut registry);
        SemanticActions::with_resolver(ElementResolver::with_registry(registry, page)).with_config(
            ActionConfig {
                timeout_per_candidate: Duration::from_millis(20),
                appearance_timeout: Duration::from_millis(200),
            },
        )
    }

    #[tokio::test]
    async fn click_resolves_and_clicks() {
        let page = Arc::new(MockPage::new());
        page.install("#go", vec![MockElement::visible("g1")]);
        let actions = actions_with(page.clone(), |r| {
            r.add_expressions("go_button", &["#go"], InsertPriority::Low);
        });

        assert!(actions.click("go_button").await.unwrap());
        assert_eq!(page.clicks(), vec!["g1".to_string()]);
    }

    #[tokio::test]
    async fn click_on_absent_category_is_false_without_side_effects() {
        let page = Arc::new(MockPage::new());
        let actions = SemanticActions::new(page.clone()).with_config(ActionConfig {
            timeout_per_candidate: Duration::from_millis(10),
            appearance_timeout: Duration::from_millis(100),
        });

        // No password input anywhere on the page
        assert!(!actions.click("password_field").await.unwrap());
        assert!(page.clicks().is_empty());
        assert!(page.fills().is_empty());
    }

    #[tokio::test]
    async fn stale_element_click_is_false_not_error() {
        let page = Arc::new(MockPage::new());
        page.install("#go", vec![MockElement::visible("g1")]);
        page.mark_stale("g1");
        let actions = actions_with(page.clone(), |r| {
            r.add_expressions("go_button", &["#go"], InsertPriority::Low);
        });

        assert!(!actions.click("go_button").await.unwrap());
        assert!(page.clicks().is_empty());
    }

    #[tokio::test]
    async fn fill_records_value() {
        let page = Arc::new(MockPage::new());
        page.install("#user", vec![MockElement::visible("u1")]);
        let actions = actions_with(page.clone(), |r| {
            r.add_expressions("username_field", &["#user"], InsertPriority::Low);
        });

        assert!(actions.fill("username_field", "alice").await.unwrap());
        assert_eq!(page.fills(), vec![("u1".to_string(), "alice".to_string())]);
    }

    #[tokio::test]
    async fn get_text_returns_content() {
        let page = Arc::new(MockPage::new());
        page.install(
            ".error",
            vec![MockElement::visible("e1").with_text("Invalid credentials")],
        );
        let actions = actions_with(page, |r| {
            r.add_expressions("error_message", &[".error"], InsertPriority::Low);
        });

        let text = actions.get_text("error_message").await.unwrap();
        assert_eq!(text.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn get_text_on_absent_category_is_none() {
        let page = Arc::new(MockPage::new());
        let actions = actions_with(page, |r| {
            r.add_expressions("error_message", &[".error"], InsertPriority::Low);
        });

        assert!(actions.get_text("error_message").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn is_visible_reflects_resolution() {
        let page = Arc::new(MockPage::new());
        page.install(".banner", vec![MockElement::visible("b1")]);
        let actions = actions_with(page, |r| {
            r.add_expressions("banner", &[".banner"], InsertPriority::Low);
            r.add_expressions("missing", &[".missing"], InsertPriority::Low);
        });

        assert!(actions.is_visible("banner").await.unwrap());
        assert!(!actions.is_visible("missing").await.unwrap());
    }

    #[tokio::test]
    async fn click_by_text_targets_matching_element() {
        let page = Arc::new(MockPage::new());
        page.install(
            ".menu-item",
            vec![
                MockElement::visible("m1").with_text("Settings"),
                MockElement::visible("m2").with_text("Sign out"),
            ],
        );
        let actions = actions_with(page.clone(), |r| {
            r.add_expressions("navigation_item", &[".menu-item"], InsertPriority::Low);
        });

        assert!(actions
            .click_by_text("navigation_item", "sign out")
            .await
            .unwrap());
        assert_eq!(page.clicks(), vec!["m2".to_string()]);
    }

    #[tokio::test]
    async fn fatal_page_loss_propagates_through_facade() {
        let page = Arc::new(MockPage::new());
        let actions = actions_with(page.clone(), |r| {
            r.add_expressions("go_button", &["#go"], InsertPriority::Low);
        });
        page.close();

        assert!(actions.click("go_button").await.is_err());
    }

    #[tokio::test]
    async fn wait_for_appearance_false_on_quiet_page() {
        let page = Arc::new(MockPage::new());
        let actions = actions_with(page, |r| {
            r.add_expressions("banner", &[".banner"], InsertPriority::Low);
        });

        assert!(!actions.wait_for_appearance("banner").await.unwrap());
    }
}
