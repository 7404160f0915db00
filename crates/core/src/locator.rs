//! Element lookup by accessible role and name.
//!
//! Mirrors how a person identifies a control ("the Subscription button")
//! instead of depending on markup structure: candidates are gathered from
//! the elements that carry the role, their accessible names are computed
//! in-page, and the locator must resolve to exactly one element.

use std::fmt;

use chromiumoxide::{Element, Page};
use tracing::debug;

use crate::error::{Error, Result};

/// Accessible roles the locator can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Link,
    Checkbox,
    Textbox,
}

impl Role {
    /// CSS selector matching every element that carries this role, either
    /// implicitly through its tag or through an explicit `role` attribute.
    pub fn css_candidates(self) -> &'static str {
        match self {
            Role::Button => {
                "button, input[type='button'], input[type='submit'], input[type='reset'], [role='button']"
            }
            Role::Link => "a[href], [role='link']",
            Role::Checkbox => "input[type='checkbox'], [role='checkbox']",
            Role::Textbox => "input[type='text'], input:not([type]), textarea, [role='textbox']",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Link => "link",
            Role::Checkbox => "checkbox",
            Role::Textbox => "textbox",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of the accessible-name computation sufficient for interactive
/// controls: aria-labelledby, then aria-label, then the value of button-like
/// inputs, then rendered text. All results are whitespace-collapsed.
const ACCESSIBLE_NAME_FN: &str = r#"
function() {
    const el = this;
    const collapse = (s) => (s || '').replace(/\s+/g, ' ').trim();

    const labelledby = el.getAttribute('aria-labelledby');
    if (labelledby) {
        const text = labelledby
            .split(/\s+/)
            .map((id) => {
                const ref = el.ownerDocument.getElementById(id);
                return ref ? ref.textContent : '';
            })
            .join(' ');
        if (collapse(text)) return collapse(text);
    }

    const label = el.getAttribute('aria-label');
    if (label && collapse(label)) return collapse(label);

    if (el.tagName === 'INPUT' && ['button', 'submit', 'reset'].includes(el.type)) {
        return collapse(el.value);
    }

    return collapse(el.innerText !== undefined ? el.innerText : el.textContent);
}
"#;

/// Locator for the single element with a given role and accessible name.
///
/// Name matching is whitespace-normalized and case-insensitive unless
/// [`RoleLocator::exact`] is set.
#[derive(Clone, Debug)]
pub struct RoleLocator {
    role: Role,
    name: String,
    exact: bool,
}

impl RoleLocator {
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            exact: false,
        }
    }

    /// Requires a case-sensitive name match.
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Resolves to the single matching element.
    ///
    /// Zero matches and multiple matches are both errors: a locator that
    /// resolves ambiguously must never interact with an arbitrary element.
    pub async fn resolve(&self, page: &Page) -> Result<Element> {
        let candidates = page.find_elements(self.role.css_candidates()).await?;
        debug!(
            target = "pagecheck",
            locator = %self,
            candidates = candidates.len(),
            "resolving locator"
        );

        let mut matched = Vec::new();
        for element in candidates {
            let name = accessible_name(&element).await?;
            if self.matches(&name) {
                matched.push(element);
            }
        }

        if matched.len() > 1 {
            return Err(Error::AmbiguousLocator {
                locator: self.to_string(),
                count: matched.len(),
            });
        }
        matched.pop().ok_or_else(|| Error::ElementNotFound {
            locator: self.to_string(),
        })
    }

    /// Resolves the locator and clicks the element.
    ///
    /// Disabled elements are refused before the click is dispatched; the
    /// driver scrolls the element into view, so an element with no visible
    /// box fails the interaction instead.
    pub async fn click(&self, page: &Page) -> Result<()> {
        let element = self.resolve(page).await?;

        if let Some(reason) = disabled_reason(&element).await? {
            return Err(Error::NotActionable {
                locator: self.to_string(),
                reason,
            });
        }

        element
            .click()
            .await
            .map(|_| ())
            .map_err(|source| Error::Interaction {
                locator: self.to_string(),
                source,
            })
    }

    fn matches(&self, accessible_name: &str) -> bool {
        let wanted = collapse_whitespace(&self.name);
        let got = collapse_whitespace(accessible_name);
        if self.exact {
            got == wanted
        } else {
            got.eq_ignore_ascii_case(&wanted)
        }
    }
}

impl fmt::Display for RoleLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role={} name=\"{}\"", self.role, self.name)
    }
}

async fn accessible_name(element: &Element) -> Result<String> {
    let returns = element
        .call_js_fn(ACCESSIBLE_NAME_FN, false)
        .await
        .map_err(|e| Error::Evaluation(e.to_string()))?;

    let name = returns
        .result
        .value
        .as_ref()
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    Ok(name.to_string())
}

async fn disabled_reason(element: &Element) -> Result<Option<String>> {
    if element.attribute("disabled").await?.is_some() {
        return Ok(Some("element is disabled".to_string()));
    }
    if element.attribute("aria-disabled").await?.as_deref() == Some("true") {
        return Ok(Some("element has aria-disabled=\"true\"".to_string()));
    }
    Ok(None)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_normalizes_runs_and_edges() {
        assert_eq!(collapse_whitespace("  Subscription  "), "Subscription");
        assert_eq!(collapse_whitespace("Add\n  item"), "Add item");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn matches_is_case_insensitive_by_default() {
        let locator = RoleLocator::new(Role::Button, "Subscription");
        assert!(locator.matches("subscription"));
        assert!(locator.matches("  Subscription "));
        assert!(!locator.matches("Subscriptions"));
    }

    #[test]
    fn matches_exact_requires_case() {
        let locator = RoleLocator::new(Role::Button, "Subscription").exact();
        assert!(locator.matches("Subscription"));
        assert!(!locator.matches("subscription"));
    }

    #[test]
    fn matches_normalizes_wanted_name_too() {
        let locator = RoleLocator::new(Role::Button, " Save   draft ");
        assert!(locator.matches("Save draft"));
    }

    #[test]
    fn button_candidates_cover_implicit_and_explicit_roles() {
        let css = Role::Button.css_candidates();
        assert!(css.contains("button"));
        assert!(css.contains("input[type='submit']"));
        assert!(css.contains("[role='button']"));
    }

    #[test]
    fn display_names_role_and_accessible_name() {
        let locator = RoleLocator::new(Role::Button, "Subscription");
        assert_eq!(locator.to_string(), "role=button name=\"Subscription\"");
    }

    #[test]
    fn role_display_is_lowercase() {
        assert_eq!(Role::Link.to_string(), "link");
        assert_eq!(Role::Textbox.as_str(), "textbox");
    }
}
