//! Built-in selector table
//!
//! Each list runs from most stable to least stable: test-automation
//! attributes, then identity attributes (`#id`, `[name=]`), then semantic
//! HTML/ARIA hints, then presentation classes, then positional fallbacks.

use crate::types::{categories, CandidateSelector, SemanticCategory};
use std::collections::HashMap;

pub(crate) fn builtin_table() -> HashMap<SemanticCategory, Vec<CandidateSelector>> {
    let mut map = HashMap::new();

    // Authentication
    insert(
        &mut map,
        categories::USERNAME_FIELD,
        &[
            "[data-testid*='username']",
            "[data-testid*='email']",
            "#username",
            "#email",
            "input[name='username']",
            "input[name='email']",
            "input[type='text'][placeholder*='username' i]",
            "input[type='text'][placeholder*='email' i]",
            "input[type='email']",
            ".username-input",
            ".email-input",
            "input[type='text']:first-of-type",
            ".form-control:first-of-type",
            "input:first-of-type",
        ],
    );
    insert(
        &mut map,
        categories::PASSWORD_FIELD,
        &[
            "[data-testid*='password']",
            "#password",
            "input[name='password']",
            "input[type='password']",
            ".password-input",
            ".form-password",
            "input[placeholder*='password' i]",
        ],
    );
    insert(
        &mut map,
        categories::LOGIN_BUTTON,
        &[
            "[data-testid*='login']",
            "[data-testid*='signin']",
            "#login-button",
            "#signin-button",
            "button[name='login']",
            "input[name='login']",
            "button[type='submit']",
            "input[type='submit']",
            "button:has-text('Login')",
            "button:has-text('Sign in')",
            "button:has-text('Log in')",
            ".login-btn",
            ".btn-login",
            ".signin-btn",
            ".submit-btn",
        ],
    );
    insert(
        &mut map,
        categories::LOGOUT_BUTTON,
        &[
            "[data-testid*='logout']",
            "[data-testid*='signout']",
            "#logout",
            "button[name='logout']",
            "button:has-text('Logout')",
            "button:has-text('Log out')",
            "button:has-text('Sign out')",
            "a:has-text('Logout')",
            "a:has-text('Log out')",
            "[aria-label*='logout' i]",
            ".logout",
            ".signout",
        ],
    );

    // Identity / main surface
    insert(
        &mut map,
        categories::USER_DISPLAY,
        &[
            "[data-testid*='user']",
            "[data-testid*='profile']",
            "[data-testid*='account']",
            ".user-name",
            ".username",
            ".profile-name",
            ".account-name",
            "[class*='user']",
            "[class*='profile']",
            "[class*='account']",
            "[aria-label*='user' i]",
            "[title*='user' i]",
        ],
    );
    insert(
        &mut map,
        categories::DASHBOARD_CONTENT,
        &[
            "[data-testid*='dashboard']",
            "#dashboard",
            ".dashboard",
            ".main-content",
            ".content-area",
            "[role='main']",
            ".page-content",
            "main",
        ],
    );

    // Generic text surfaces
    insert(
        &mut map,
        categories::HEADING_GENERIC,
        &[
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "[role='heading']",
            ".heading",
            ".title",
            ".header-text",
            ".page-title",
            ".section-title",
            ".card-title",
            "[class*='heading']",
            "[class*='title']",
        ],
    );
    insert(
        &mut map,
        categories::TEXT_GENERIC,
        &[
            "p",
            "span",
            "div[class*='text']",
            ".text",
            ".content",
            ".description",
            "[role='text']",
            ".message",
            ".info",
            "div:not([class]):not([id])",
            "span:not([class]):not([id])",
        ],
    );
    insert(
        &mut map,
        categories::LABEL_GENERIC,
        &[
            "label",
            "[role='label']",
            ".label",
            ".caption",
            ".field-label",
            ".form-label",
            ".input-label",
            "[class*='label']",
            "[for]",
        ],
    );

    // Navigation
    insert(
        &mut map,
        categories::NAVIGATION_ITEM,
        &[
            "[role='menuitem']",
            "nav a",
            ".nav-item",
            ".menu-item",
            ".navigation-item",
            ".nav-link",
            ".menu-link",
            ".sidebar-nav a",
            ".main-nav a",
            ".navbar-nav a",
            ".nav li a",
            ".menu li a",
            "ul.nav a",
            "ul.menu a",
        ],
    );
    insert(
        &mut map,
        categories::NAVIGATION_MENU,
        &[
            "[role='navigation']",
            "nav",
            ".navigation",
            ".main-menu",
            ".primary-nav",
            ".navbar",
            ".nav-container",
            ".menu-container",
            ".nav",
            ".menu",
        ],
    );
    insert(
        &mut map,
        categories::PRIMARY_NAVIGATION,
        &[
            "[role='navigation'][aria-label*='main' i]",
            ".main-navigation",
            ".primary-navigation",
            ".main-nav",
            "nav.primary",
            ".navbar-main",
            ".header-nav",
            "nav:first-of-type",
            ".nav:first-of-type",
        ],
    );
    insert(
        &mut map,
        categories::SECONDARY_NAVIGATION,
        &[
            "[role='navigation'][aria-label*='secondary' i]",
            ".secondary-navigation",
            ".sub-navigation",
            ".sidebar-nav",
            ".side-nav",
            ".left-nav",
            ".right-nav",
            "nav:not(.primary):not(.main)",
            ".nav:not(.primary):not(.main)",
        ],
    );
    insert(
        &mut map,
        categories::BREADCRUMB_ITEM,
        &[
            "[role='breadcrumb'] a",
            ".breadcrumb a",
            ".breadcrumbs a",
            ".breadcrumb-item",
            ".crumb",
            ".path a",
            ".trail a",
        ],
    );
    insert(
        &mut map,
        categories::TAB_ITEM,
        &[
            "[role='tab']",
            ".tab",
            ".tab-item",
            ".nav-tab",
            ".tabs a",
            ".tab-link",
            ".tab-button",
            ".tabbed-nav a",
            "ul.tabs a",
        ],
    );
    insert(
        &mut map,
        categories::DROPDOWN_ITEM,
        &[
            "[role='menuitem']",
            ".dropdown-item",
            ".menu-item",
            ".dropdown a",
            ".menu a",
            ".submenu a",
            ".dropdown li a",
            ".menu li a",
        ],
    );

    // Generic widgets
    insert(
        &mut map,
        categories::BUTTON_GENERIC,
        &[
            "button",
            "[role='button']",
            "input[type='button']",
            ".btn",
            ".button",
            ".action-button",
            "a.btn",
            ".clickable",
        ],
    );
    insert(
        &mut map,
        categories::LINK_GENERIC,
        &["a[href]", "[role='link']", ".link", ".action-link", "a"],
    );
    insert(
        &mut map,
        categories::CONTENT_AREA,
        &[
            "[role='main']",
            "main",
            ".main-content",
            ".content",
            ".page-content",
            ".content-area",
            "#content",
            ".main",
        ],
    );

    // Validation
    insert(
        &mut map,
        categories::ERROR_MESSAGE,
        &[
            "[role='alert']",
            "[data-testid*='error']",
            ".error",
            ".alert-danger",
            ".alert-error",
            ".error-message",
            ".invalid-feedback",
            ".field-error",
            ".validation-error",
            "[class*='error']",
            ".alert",
        ],
    );
    insert(
        &mut map,
        categories::SUCCESS_MESSAGE,
        &[
            "[data-testid*='success']",
            ".success",
            ".alert-success",
            ".success-message",
            ".confirmation",
            "[class*='success']",
        ],
    );
    insert(
        &mut map,
        categories::VALIDATION_MESSAGE,
        &[
            ".invalid-feedback",
            ".field-error",
            ".validation-error",
            "[role='alert']",
            ".error",
            "[class*='error']",
            "[class*='invalid']",
        ],
    );

    map
}

fn insert(
    map: &mut HashMap<SemanticCategory, Vec<CandidateSelector>>,
    name: &str,
    expressions: &[&str],
) {
    map.insert(
        SemanticCategory::new(name),
        expressions
            .iter()
            .map(|expr| CandidateSelector::new(*expr))
            .collect(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectorKind;

    #[test]
    fn table_covers_well_known_categories() {
        let table = builtin_table();
        for name in [
            categories::USERNAME_FIELD,
            categories::PASSWORD_FIELD,
            categories::LOGIN_BUTTON,
            categories::LOGOUT_BUTTON,
            categories::USER_DISPLAY,
            categories::DASHBOARD_CONTENT,
            categories::ERROR_MESSAGE,
            categories::SUCCESS_MESSAGE,
            categories::VALIDATION_MESSAGE,
        ] {
            let list = table
                .get(name)
                .unwrap_or_else(|| panic!("missing category {name}"));
            assert!(!list.is_empty(), "empty list for {name}");
        }
    }

    #[test]
    fn login_button_prefers_test_attributes() {
        let table = builtin_table();
        let list = table.get(categories::LOGIN_BUTTON).unwrap();
        assert_eq!(list[0].kind, SelectorKind::TestAttribute);
        // Submit-button fallback sits between identity attrs and class names
        assert!(list
            .iter()
            .any(|c| c.expression == "button[type='submit']"));
        assert_eq!(list.last().unwrap().kind, SelectorKind::Class);
    }
}
