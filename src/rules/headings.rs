// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading order rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Adjacent headings are compared by tag name as strings, so `h2` after `h3`
//! is flagged. For `h1`..`h6` this matches numeric order.

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, ALL_LEVELS};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Headings must not step back to an earlier tag name
pub struct HeadingOrderRule;

impl Rule for HeadingOrderRule {
    fn id(&self) -> &'static str {
        "heading-order"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["heading-order"]
    }

    fn name(&self) -> &'static str {
        "Heading Order"
    }

    fn description(&self) -> &'static str {
        "Checks that h1-h6 headings appear in logical order (WCAG 1.3.1)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let headings: Vec<&str> = document
            .find_all(HEADING_TAGS)
            .iter()
            .map(|n| n.name())
            .collect();
        let sequence = format!("[{}]", headings.join(", "));

        let findings = headings
            .windows(2)
            .filter(|pair| pair[1] < pair[0])
            .map(|_| {
                Finding::new(
                    self.id(),
                    Severity::Medium,
                    "Header tags are not in logical order.",
                    "Headers must follow a logical order (e.g., h1 > h2 > h3) to provide a clear structure for screen readers and improve navigation for all users.",
                )
                .with_wcag("1.3.1")
                .with_element(sequence.clone())
            })
            .collect();
        Ok(findings)
    }
}
