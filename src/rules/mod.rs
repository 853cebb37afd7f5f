// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules.
//!
//! Each rule is an independent, pure check over a [`Document`]. A rule
//! declares the exact set of conformance levels it applies to and a fixed
//! severity for what it reports. [`registry`] fixes the evaluation order,
//! which is also the order findings appear in a report.

pub mod contrast;
pub mod forms;
pub mod headings;
pub mod images;
pub mod keyboard;
pub mod links;
pub mod text_size;

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, WcagLevel};

/// Applies at every level
pub const ALL_LEVELS: &[WcagLevel] = &[WcagLevel::A, WcagLevel::AA, WcagLevel::AAA];
/// Applies at AA and AAA
pub const AA_AND_ABOVE: &[WcagLevel] = &[WcagLevel::AA, WcagLevel::AAA];
/// Applies at AAA only
pub const AAA_ONLY: &[WcagLevel] = &[WcagLevel::AAA];

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Stable identifier of the check
    fn id(&self) -> &'static str;

    /// Every `rule_id` this rule puts on its findings. Most rules report
    /// under their own id; a rule with several distinct findings lists each.
    fn finding_ids(&self) -> &'static [&'static str];

    /// Human-readable name of this rule
    fn name(&self) -> &'static str;

    /// Short description of what this rule checks
    fn description(&self) -> &'static str;

    /// Levels this rule applies to
    fn levels(&self) -> &'static [WcagLevel];

    /// Inspect the document and return findings
    fn check(&self, document: &Document, level: WcagLevel) -> Result<Vec<Finding>>;

    /// Check if this rule applies to the given WCAG level
    fn applies_to_level(&self, level: WcagLevel) -> bool {
        self.levels().contains(&level)
    }

    /// Run the check if it applies at `level`, otherwise report nothing
    fn evaluate(&self, document: &Document, level: WcagLevel) -> Result<Vec<Finding>> {
        if !self.applies_to_level(level) {
            return Ok(Vec::new());
        }
        self.check(document, level)
    }
}

/// All rules in evaluation order
pub fn registry() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(images::MissingAltRule),
        Box::new(links::EmptyLinkRule),
        Box::new(headings::HeadingOrderRule),
        Box::new(contrast::TextContrastRule),
        Box::new(forms::FormControlRule),
        Box::new(text_size::TextSizeRule),
        Box::new(keyboard::KeyboardRule),
        Box::new(links::ColorOnlyLinkRule),
        Box::new(forms::FormLabelRule),
        Box::new(images::ImageBackgroundRule),
    ]
}

/// Render a level set as "A/AA/AAA"
pub fn format_levels(levels: &[WcagLevel]) -> String {
    levels
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
