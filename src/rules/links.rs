// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link rules
//!
//! - Empty link text - WCAG 2.4.4 Link Purpose (Level A)
//! - Color-only links - WCAG 1.4.1 Use of Color (Level A, enforced from AA)

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, AA_AND_ABOVE, ALL_LEVELS};

/// Links need visible text or an `aria-label`
pub struct EmptyLinkRule;

impl Rule for EmptyLinkRule {
    fn id(&self) -> &'static str {
        "empty-link"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["empty-link"]
    }

    fn name(&self) -> &'static str {
        "Empty Link Text"
    }

    fn description(&self) -> &'static str {
        "Checks <a> elements for text content or aria-label (WCAG 2.4.4)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let findings = document
            .find_all(&["a"])
            .into_iter()
            .filter(|link| link.text_content().is_empty() && link.non_empty_attr("aria-label").is_none())
            .map(|link| {
                Finding::new(
                    self.id(),
                    Severity::Medium,
                    "Empty <a> tag without aria-label.",
                    "Links must have descriptive text or an 'aria-label' attribute to provide context for screen readers. This ensures that users understand the purpose of the link.",
                )
                .with_wcag("2.4.4")
                .with_element(link.outer_html())
            })
            .collect();
        Ok(findings)
    }
}

/// Links styled with color may be distinguishable by color alone.
/// Any `color` substring in the inline style counts, `background-color` included.
pub struct ColorOnlyLinkRule;

impl Rule for ColorOnlyLinkRule {
    fn id(&self) -> &'static str {
        "link-color"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["link-color"]
    }

    fn name(&self) -> &'static str {
        "Color-Only Links"
    }

    fn description(&self) -> &'static str {
        "Flags <a> elements whose inline style sets a color (WCAG 1.4.1)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        AA_AND_ABOVE
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let findings = document
            .find_all(&["a"])
            .into_iter()
            .filter(|link| link.attr("style").unwrap_or("").contains("color"))
            .map(|link| {
                Finding::new(
                    self.id(),
                    Severity::Medium,
                    "Links should be accessible without relying on color.",
                    "Links must be distinguishable without relying solely on color. This ensures that users with color blindness or low vision can identify links.",
                )
                .with_wcag("1.4.1")
                .with_element(link.outer_html())
            })
            .collect();
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_with_text_passes() {
        let doc = Document::parse(r#"<a href="/about">About us</a>"#);
        assert!(EmptyLinkRule.check(&doc, WcagLevel::A).unwrap().is_empty());
    }

    #[test]
    fn test_empty_link() {
        let doc = Document::parse(r#"<a href="/x">   </a><a href="/y"><img src="i.png"></a>"#);
        let findings = EmptyLinkRule.check(&doc, WcagLevel::A).unwrap();
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Medium));
    }

    #[test]
    fn test_aria_label_satisfies_link() {
        let doc = Document::parse(
            r#"<a href="/home" aria-label="Home"></a><a href="/blank" aria-label=""></a>"#,
        );
        let findings = EmptyLinkRule.check(&doc, WcagLevel::A).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].element.as_deref().unwrap_or_default().contains("/blank"));
    }

    #[test]
    fn test_color_only_link_substring_match() {
        let doc = Document::parse(
            r#"<a href="/a" style="color: red">A</a>
               <a href="/b" style="background-color: yellow">B</a>
               <a href="/c" style="text-decoration: underline">C</a>
               <a href="/d">D</a>"#,
        );
        let findings = ColorOnlyLinkRule.check(&doc, WcagLevel::AA).unwrap();
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_color_only_link_not_at_level_a() {
        let doc = Document::parse(r#"<a href="/a" style="color: red">A</a>"#);
        assert!(ColorOnlyLinkRule.evaluate(&doc, WcagLevel::A).unwrap().is_empty());
    }
}
