// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form rules - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! - Every control inside a form has an `id` and an `aria-label` or `label` attribute
//! - Every form contains at least one `<label>` element
//!
//! The control check reads the attribute literally named `label`; whether a
//! `<label>` element exists is the form-level check.

use crate::document::{Document, Node};
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, ALL_LEVELS};

const FORM_CONTROLS: &[&str] = &["input", "textarea", "select"];

/// Form controls must be addressable and named
pub struct FormControlRule;

impl Rule for FormControlRule {
    fn id(&self) -> &'static str {
        "form-controls"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["form-control-id", "form-control-label"]
    }

    fn name(&self) -> &'static str {
        "Form Control Addressability"
    }

    fn description(&self) -> &'static str {
        "Checks form controls for id and aria-label/label attributes (WCAG 3.3.2)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for form in document.find_all(&["form"]) {
            for control in form.find_all(FORM_CONTROLS) {
                check_control(&control, &mut findings);
            }
        }

        Ok(findings)
    }
}

fn check_control(control: &Node<'_>, findings: &mut Vec<Finding>) {
    let tag = control.name();

    if control.non_empty_attr("id").is_none() {
        findings.push(
            Finding::new(
                "form-control-id",
                Severity::Medium,
                &format!("Form input element <{}> lacks id.", tag),
                "Form input elements must have an 'id' attribute to associate them with labels. This helps screen readers identify the purpose of the input.",
            )
            .with_wcag("3.3.2")
            .with_element(control.outer_html()),
        );
    }

    if control.non_empty_attr("aria-label").is_none() && control.non_empty_attr("label").is_none() {
        findings.push(
            Finding::new(
                "form-control-label",
                Severity::Medium,
                &format!("Form input element <{}> lacks aria-label or label.", tag),
                "Form input elements must have an 'aria-label' or 'label' to provide context for screen readers. This ensures that users understand the purpose of the input.",
            )
            .with_wcag("3.3.2")
            .with_element(control.outer_html()),
        );
    }
}

/// Every form needs at least one `<label>` element
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn id(&self) -> &'static str {
        "form-no-label"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["form-no-label"]
    }

    fn name(&self) -> &'static str {
        "Form Label Element"
    }

    fn description(&self) -> &'static str {
        "Checks that each <form> contains a <label> element (WCAG 3.3.2)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let findings = document
            .find_all(&["form"])
            .into_iter()
            .filter(|form| form.first_matching("label", |_| true).is_none())
            .map(|form| {
                Finding::new(
                    self.id(),
                    Severity::High,
                    "Form elements must have clear labels.",
                    "Form elements must have clear labels to provide context for screen readers. This ensures that users understand the purpose of each form element.",
                )
                .with_wcag("3.3.2")
                .with_element(form.outer_html())
            })
            .collect();
        Ok(findings)
    }
}
