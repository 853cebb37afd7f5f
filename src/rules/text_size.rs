// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scalable text rule - WCAG 1.4.4 Resize Text (Level AA)

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, AA_AND_ABOVE};
use crate::style::InlineStyle;

/// The body should declare a font size in relative units
pub struct TextSizeRule;

impl Rule for TextSizeRule {
    fn id(&self) -> &'static str {
        "text-size"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["text-size"]
    }

    fn name(&self) -> &'static str {
        "Scalable Text Size"
    }

    fn description(&self) -> &'static str {
        "Checks that <body> sets font-size in relative units (WCAG 1.4.4)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        AA_AND_ABOVE
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let Some(body) = document.authored_body() else {
            return Ok(Vec::new());
        };

        let style = InlineStyle::new(body.attr("style").unwrap_or(""));
        if style.has_font_size() && !style.uses_px() {
            return Ok(Vec::new());
        }

        Ok(vec![Finding::new(
            self.id(),
            Severity::Low,
            "Text size may not be scalable (use relative units like em or rem).",
            "Text size should be defined using relative units (e.g., em, rem) to allow users to scale text according to their preferences. This improves readability for users with visual impairments.",
        )
        .with_wcag("1.4.4")
        .with_element(body.outer_html())])
    }
}
