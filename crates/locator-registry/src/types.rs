//! Core types for the selector registry

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Semantic element category
///
/// A stable, application-independent name for a UI role (e.g.
/// `login_button`). The set is open: the extension API may introduce new
/// categories at runtime, so this is a newtype over a string rather than a
/// closed enum. Well-known names shipped with the built-in table live in
/// [`categories`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticCategory(String);

impl SemanticCategory {
    /// Create a category from any string-like name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the category name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SemanticCategory {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for SemanticCategory {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Allows registry lookups keyed by `&str` without allocating.
impl Borrow<str> for SemanticCategory {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Well-known category names covered by the built-in selector table
pub mod categories {
    // Authentication
    pub const USERNAME_FIELD: &str = "username_field";
    pub const PASSWORD_FIELD: &str = "password_field";
    pub const LOGIN_BUTTON: &str = "login_button";
    pub const LOGOUT_BUTTON: &str = "logout_button";

    // Identity / main surface
    pub const USER_DISPLAY: &str = "user_display";
    pub const DASHBOARD_CONTENT: &str = "dashboard_content";

    // Generic text surfaces
    pub const HEADING_GENERIC: &str = "heading_generic";
    pub const TEXT_GENERIC: &str = "text_generic";
    pub const LABEL_GENERIC: &str = "label_generic";

    // Navigation
    pub const NAVIGATION_ITEM: &str = "navigation_item";
    pub const NAVIGATION_MENU: &str = "navigation_menu";
    pub const PRIMARY_NAVIGATION: &str = "primary_navigation";
    pub const SECONDARY_NAVIGATION: &str = "secondary_navigation";
    pub const BREADCRUMB_ITEM: &str = "breadcrumb_item";
    pub const TAB_ITEM: &str = "tab_item";
    pub const DROPDOWN_ITEM: &str = "dropdown_item";

    // Generic widgets
    pub const BUTTON_GENERIC: &str = "button_generic";
    pub const LINK_GENERIC: &str = "link_generic";
    pub const CONTENT_AREA: &str = "content_area";

    // Validation
    pub const ERROR_MESSAGE: &str = "error_message";
    pub const SUCCESS_MESSAGE: &str = "success_message";
    pub const VALIDATION_MESSAGE: &str = "validation_message";
}

/// Expression kind of a candidate selector
///
/// Inferred from the shape of the expression; purely informational for the
/// resolver (expressions are handed verbatim to the driver) but useful for
/// diagnostics and for sanity-checking table ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    /// Test-automation attribute (`data-testid` and friends)
    TestAttribute,

    /// Element id (`#login`)
    Id,

    /// Attribute match (`input[name='user']`)
    Attribute,

    /// ARIA role or label (`[role='alert']`)
    Role,

    /// Presentation class (`.login-btn`)
    Class,

    /// Text content match (`button:has-text('Login')`)
    TextMatch,

    /// Structural/positional guess (`input:first-of-type`, bare tags)
    Structural,
}

impl SelectorKind {
    /// Get kind name as string
    pub fn name(&self) -> &'static str {
        match self {
            SelectorKind::TestAttribute => "test-attribute",
            SelectorKind::Id => "id",
            SelectorKind::Attribute => "attribute",
            SelectorKind::Role => "role",
            SelectorKind::Class => "class",
            SelectorKind::TextMatch => "text-match",
            SelectorKind::Structural => "structural",
        }
    }

    /// Infer the kind from the shape of a selector expression
    pub fn infer(expression: &str) -> Self {
        let expr = expression.trim();
        if expr.contains("data-testid") || expr.contains("data-test") || expr.contains("data-qa") {
            SelectorKind::TestAttribute
        } else if expr.contains(":has-text(") || expr.contains(":text(") {
            SelectorKind::TextMatch
        } else if expr.contains("[role=") || expr.contains("aria-") {
            SelectorKind::Role
        } else if expr.contains(":first-of-type")
            || expr.contains(":nth-")
            || expr.contains(":not(")
        {
            SelectorKind::Structural
        } else if expr.starts_with('#') {
            SelectorKind::Id
        } else if expr.starts_with('.') {
            SelectorKind::Class
        } else if expr.contains('[') {
            SelectorKind::Attribute
        } else {
            // Bare tags and descendant combinators are positional guesses
            SelectorKind::Structural
        }
    }
}

/// One candidate selector in a category's ordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSelector {
    /// Selector expression, opaque to the resolver
    pub expression: String,

    /// Inferred expression kind
    pub kind: SelectorKind,
}

impl CandidateSelector {
    /// Create a candidate, inferring its kind from the expression
    pub fn new(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let kind = SelectorKind::infer(&expression);
        Self { expression, kind }
    }
}

impl fmt::Display for CandidateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

/// Insertion point for registry extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPriority {
    /// Prepend before all existing candidates (tried first)
    High,

    /// Splice into the midpoint of the existing list
    Medium,

    /// Append after all existing candidates (tried last)
    Low,
}

impl InsertPriority {
    /// Get priority name as string
    pub fn name(&self) -> &'static str {
        match self {
            InsertPriority::High => "high",
            InsertPriority::Medium => "medium",
            InsertPriority::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_borrows_as_str() {
        let cat = SemanticCategory::new("login_button");
        assert_eq!(cat.as_str(), "login_button");
        let borrowed: &str = std::borrow::Borrow::borrow(&cat);
        assert_eq!(borrowed, "login_button");
    }

    #[test]
    fn kind_inference() {
        assert_eq!(
            SelectorKind::infer("[data-testid*='login']"),
            SelectorKind::TestAttribute
        );
        assert_eq!(SelectorKind::infer("#username"), SelectorKind::Id);
        assert_eq!(
            SelectorKind::infer("input[name='email']"),
            SelectorKind::Attribute
        );
        assert_eq!(SelectorKind::infer("[role='alert']"), SelectorKind::Role);
        assert_eq!(SelectorKind::infer(".login-btn"), SelectorKind::Class);
        assert_eq!(
            SelectorKind::infer("button:has-text('Login')"),
            SelectorKind::TextMatch
        );
        assert_eq!(
            SelectorKind::infer("input[type='text']:first-of-type"),
            SelectorKind::Structural
        );
        assert_eq!(SelectorKind::infer("main"), SelectorKind::Structural);
    }

    #[test]
    fn category_serde_is_transparent() {
        let cat = SemanticCategory::new("error_message");
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, "\"error_message\"");
        let back: SemanticCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cat);
    }

    #[test]
    fn priority_names() {
        assert_eq!(InsertPriority::High.name(), "high");
        assert_eq!(InsertPriority::Medium.name(), "medium");
        assert_eq!(InsertPriority::Low.name(), "low");
    }
}
