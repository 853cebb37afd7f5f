// SPDX-License-Identifier: PMPL-1.0-or-later
//! Text contrast rule - WCAG 1.4.3 Contrast Minimum (Level AA), 1.4.6 Enhanced (Level AAA)
//!
//! Looks at every visible text node whose parent element carries an inline
//! style with both `color` and `background-color`, and checks the pair
//! against the level threshold. Styles that cannot be split into two tokens
//! are skipped; tokens that do not resolve to a color fail.

use crate::contrast;
use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, AA_AND_ABOVE};
use crate::style::InlineStyle;
use tracing::debug;

/// Inline foreground/background pairs must meet the contrast threshold
pub struct TextContrastRule;

impl Rule for TextContrastRule {
    fn id(&self) -> &'static str {
        "low-contrast"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["low-contrast"]
    }

    fn name(&self) -> &'static str {
        "Text Contrast"
    }

    fn description(&self) -> &'static str {
        "Checks inline color/background-color contrast ratios (WCAG 1.4.3/1.4.6)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        AA_AND_ABOVE
    }

    fn check(&self, document: &Document, level: WcagLevel) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for node in document.text_nodes() {
            let raw = node.parent.attr("style").unwrap_or("").to_lowercase();
            let style = InlineStyle::new(&raw);
            if !(style.contains("color") && style.contains("background-color")) {
                continue;
            }

            let (fg, bg) = match style.color_pair() {
                Ok(pair) => pair,
                Err(e) => {
                    debug!("Skipping <{}>: {}", node.parent.name(), e);
                    continue;
                }
            };

            if contrast::meets_contrast(fg, bg, level) {
                continue;
            }
            debug!(
                "{} on {} below {}:1",
                fg,
                bg,
                contrast::required_ratio(level)
            );

            findings.push(
                Finding::new(
                    self.id(),
                    Severity::High,
                    "Low contrast between text and background color.",
                    "Text and background colors must have sufficient contrast to be readable by users with visual impairments. This is crucial for users with low vision or color blindness.",
                )
                .with_wcag(if level == WcagLevel::AAA { "1.4.6" } else { "1.4.3" })
                .with_element(node.text),
            );
        }

        Ok(findings)
    }
}
