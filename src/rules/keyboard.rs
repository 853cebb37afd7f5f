// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard navigation rule - WCAG 2.1.1 Keyboard (Level A), 4.1.2 Name, Role, Value (Level A)
//!
//! Checks interactive elements for:
//! - An explicit `tabindex`
//! - An ARIA `role` from the accepted set, when one is declared

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, ALL_LEVELS};

/// Elements users interact with
const INTERACTIVE_TAGS: &[&str] = &[
    "a", "button", "input", "textarea", "select", "form", "area", "iframe",
];

/// Roles accepted on interactive elements
const ALLOWED_ROLES: &[&str] = &["link", "button", "checkbox", "textbox"];

/// Interactive elements must be reachable and correctly described
pub struct KeyboardRule;

impl Rule for KeyboardRule {
    fn id(&self) -> &'static str {
        "keyboard"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["missing-tabindex", "invalid-role"]
    }

    fn name(&self) -> &'static str {
        "Keyboard Navigability"
    }

    fn description(&self) -> &'static str {
        "Checks interactive elements for tabindex and appropriate ARIA roles (WCAG 2.1.1, 4.1.2)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for element in document.find_all(INTERACTIVE_TAGS) {
            let tag = element.name();

            if element.non_empty_attr("tabindex").is_none() {
                findings.push(
                    Finding::new(
                        "missing-tabindex",
                        Severity::Medium,
                        &format!("Interactive element <{}> lacks tabindex.", tag),
                        "Interactive elements must have a 'tabindex' attribute to ensure they are accessible via keyboard navigation. This is essential for users who cannot use a mouse.",
                    )
                    .with_wcag("2.1.1")
                    .with_element(element.outer_html()),
                );
            }

            if let Some(role) = element.non_empty_attr("role") {
                if !ALLOWED_ROLES.contains(&role) {
                    findings.push(
                        Finding::new(
                            "invalid-role",
                            Severity::Low,
                            &format!("Element <{}> uses inappropriate ARIA role {}.", tag, role),
                            "Elements must use appropriate ARIA roles to provide context for screen readers. This ensures that users understand the purpose and behavior of the element.",
                        )
                        .with_wcag("4.1.2")
                        .with_element(element.outer_html()),
                    );
                }
            }
        }

        Ok(findings)
    }
}
