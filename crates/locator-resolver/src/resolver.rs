//! Element resolver: ranked-candidate fallback with bounded visibility waits

use crate::errors::LocatorError;
use crate::ports::PagePort;
use crate::types::{CandidateOutcome, MissReason, ResolvedElement, Resolution, TextMatch};
use locator_registry::{CandidateSelector, InsertPriority, SelectorRegistry, SemanticCategory};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// Resolver tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Visibility budget for each candidate when no explicit timeout is given
    pub timeout_per_candidate: Duration,

    /// Pause between sweeps in [`ElementResolver::wait_for_appearance`]
    pub poll_interval: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_per_candidate: Duration::from_secs(5),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Resolves semantic categories to live, visible element handles
///
/// Candidates are evaluated strictly sequentially in registry list order;
/// earlier entries always take precedence over later ones, even if a later
/// one would also match. The first visible hit ends the search. There is no
/// racing of candidates: a later, less stable candidate must not win on
/// latency.
pub struct ElementResolver {
    registry: SelectorRegistry,
    page: Arc<dyn PagePort>,
    config: ResolverConfig,
}

impl ElementResolver {
    /// Create a resolver over the built-in selector table
    pub fn new(page: Arc<dyn PagePort>) -> Self {
        Self::with_registry(SelectorRegistry::builtin(), page)
    }

    /// Create a resolver over a caller-provided registry
    pub fn with_registry(registry: SelectorRegistry, page: Arc<dyn PagePort>) -> Self {
        Self {
            registry,
            page,
            config: ResolverConfig::default(),
        }
    }

    /// Override the default configuration
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &SelectorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The underlying page port
    pub fn page(&self) -> &Arc<dyn PagePort> {
        &self.page
    }

    /// Extend the registry; expected at setup time, before resolution begins
    pub fn add_candidates(
        &mut self,
        category: impl Into<SemanticCategory>,
        candidates: Vec<CandidateSelector>,
        priority: InsertPriority,
    ) {
        self.registry.add_candidates(category, candidates, priority);
    }

    /// Resolve with the configured per-candidate timeout
    pub async fn resolve_default(&self, category: &str) -> Result<Resolution, LocatorError> {
        self.resolve(category, self.config.timeout_per_candidate)
            .await
    }

    /// Resolve a category to a visible element, or `NotFound`
    ///
    /// `timeout_per_candidate` bounds only the visibility wait of a candidate
    /// that matched; a zero-match candidate costs one dry lookup and no wait.
    pub async fn resolve(
        &self,
        category: &str,
        timeout_per_candidate: Duration,
    ) -> Result<Resolution, LocatorError> {
        self.resolve_inner(category, timeout_per_candidate, None)
            .await
    }

    /// Resolve a category to a visible element whose text matches `needle`
    ///
    /// Same loop as [`resolve`](Self::resolve), but among a candidate's
    /// matches the first element whose text satisfies the filter is taken. A
    /// text-read failure on one element skips that element only.
    pub async fn resolve_with_text(
        &self,
        category: &str,
        needle: &str,
        matcher: TextMatch,
        timeout_per_candidate: Duration,
    ) -> Result<Resolution, LocatorError> {
        self.resolve_inner(category, timeout_per_candidate, Some((needle, matcher)))
            .await
    }

    async fn resolve_inner(
        &self,
        category: &str,
        timeout_per_candidate: Duration,
        text: Option<(&str, TextMatch)>,
    ) -> Result<Resolution, LocatorError> {
        let candidates = self.registry.candidates(category);
        if candidates.is_empty() {
            debug!("No selectors registered for category: {}", category);
            return Ok(Resolution::NotFound);
        }

        for (index, candidate) in candidates.iter().enumerate() {
            debug!(
                "Trying candidate {}/{} for {}: {}",
                index + 1,
                candidates.len(),
                category,
                candidate
            );

            match self
                .try_candidate(candidate, timeout_per_candidate, text)
                .await
            {
                CandidateOutcome::Visible(handle) => {
                    info!("Resolved {} using candidate: {}", category, candidate);
                    return Ok(Resolution::Found(ResolvedElement {
                        handle,
                        category: SemanticCategory::new(category),
                        selector: candidate.clone(),
                        candidate_index: index,
                    }));
                }
                CandidateOutcome::Miss(reason) => {
                    debug!("Candidate {} missed for {}: {}", candidate, category, reason);
                }
                CandidateOutcome::Fatal(err) => return Err(err.into()),
            }
        }

        debug!("All candidates exhausted for category: {}", category);
        Ok(Resolution::NotFound)
    }

    /// Evaluate one candidate against the live page
    async fn try_candidate(
        &self,
        candidate: &CandidateSelector,
        timeout: Duration,
        text: Option<(&str, TextMatch)>,
    ) -> CandidateOutcome {
        let matches = match self.page.query_all(&candidate.expression).await {
            Ok(matches) => matches,
            Err(err) if err.is_fatal() => return CandidateOutcome::Fatal(err),
            Err(err) => return CandidateOutcome::Miss(MissReason::Rejected(err.to_string())),
        };

        if matches.is_empty() {
            return CandidateOutcome::Miss(MissReason::NoMatch);
        }

        let target = match text {
            // First element in document order
            None => match matches.into_iter().next() {
                Some(handle) => handle,
                None => return CandidateOutcome::Miss(MissReason::NoMatch),
            },
            // First element whose text satisfies the filter
            Some((needle, matcher)) => {
                let mut found = None;
                for handle in matches {
                    match self.page.read_text(&handle).await {
                        Ok(content) if matcher.matches(&content, needle) => {
                            found = Some(handle);
                            break;
                        }
                        Ok(_) => {}
                        Err(err) if err.is_fatal() => return CandidateOutcome::Fatal(err),
                        Err(err) => {
                            debug!("Text read failed on {}: {}", handle.element_id, err);
                        }
                    }
                }
                match found {
                    Some(handle) => handle,
                    None => return CandidateOutcome::Miss(MissReason::TextMismatch),
                }
            }
        };

        match self.page.wait_visible(&target, timeout).await {
            Ok(true) => CandidateOutcome::Visible(target),
            Ok(false) => CandidateOutcome::Miss(MissReason::NeverVisible),
            Err(err) if err.is_fatal() => CandidateOutcome::Fatal(err),
            Err(err) => CandidateOutcome::Miss(MissReason::Rejected(err.to_string())),
        }
    }

    /// Wait up to an aggregate `timeout` for any candidate to become visible
    ///
    /// Unlike [`resolve`](Self::resolve), the budget here is total, not per
    /// candidate: the full list is swept repeatedly with short visibility
    /// slices until something appears or the deadline passes.
    pub async fn wait_for_appearance(
        &self,
        category: &str,
        timeout: Duration,
    ) -> Result<bool, LocatorError> {
        let candidates = self.registry.candidates(category);
        if candidates.is_empty() {
            debug!("No selectors registered for category: {}", category);
            return Ok(false);
        }

        let deadline = Instant::now() + timeout;
        loop {
            for candidate in candidates {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    debug!("Appearance deadline elapsed for {}", category);
                    return Ok(false);
                }

                let slice = remaining.min(self.config.poll_interval);
                match self.try_candidate(candidate, slice, None).await {
                    CandidateOutcome::Visible(_) => {
                        info!("Element {} appeared using candidate: {}", category, candidate);
                        return Ok(true);
                    }
                    CandidateOutcome::Miss(_) => {}
                    CandidateOutcome::Fatal(err) => return Err(err.into()),
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                debug!("Appearance deadline elapsed for {}", category);
                return Ok(false);
            }
            sleep(self.config.poll_interval.min(remaining)).await;
        }
    }
}
