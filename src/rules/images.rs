// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image rules
//!
//! - Missing alt text - WCAG 1.1.1 Non-text Content (Level A)
//! - Image background contrast - WCAG 1.4.6 Contrast Enhanced (Level AAA)

use crate::document::Document;
use crate::error::Result;
use crate::model::{Finding, Severity, WcagLevel};
use crate::rules::{Rule, AAA_ONLY, ALL_LEVELS};
use crate::style::InlineStyle;

/// Every `<img>` needs a non-empty `alt` attribute
pub struct MissingAltRule;

impl Rule for MissingAltRule {
    fn id(&self) -> &'static str {
        "missing-alt"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["missing-alt"]
    }

    fn name(&self) -> &'static str {
        "Missing Alt Text"
    }

    fn description(&self) -> &'static str {
        "Checks <img> elements for a non-empty alt attribute (WCAG 1.1.1)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        ALL_LEVELS
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let findings = document
            .find_all(&["img"])
            .into_iter()
            .filter(|img| img.non_empty_attr("alt").is_none())
            .map(|img| {
                Finding::new(
                    self.id(),
                    Severity::High,
                    "Missing alt attribute in <img> tag.",
                    "Images must have an 'alt' attribute to provide alternative text for screen readers. This helps visually impaired users understand the content of the image.",
                )
                .with_wcag("1.1.1")
                .with_element(img.outer_html())
            })
            .collect();
        Ok(findings)
    }
}

/// Images with an inline background color may carry text with poor contrast.
/// Presence heuristic only; no ratio is computed.
pub struct ImageBackgroundRule;

impl Rule for ImageBackgroundRule {
    fn id(&self) -> &'static str {
        "image-background"
    }

    fn finding_ids(&self) -> &'static [&'static str] {
        &["image-background"]
    }

    fn name(&self) -> &'static str {
        "Image Background Contrast"
    }

    fn description(&self) -> &'static str {
        "Flags <img> elements styled with a background-color (WCAG 1.4.6)"
    }

    fn levels(&self) -> &'static [WcagLevel] {
        AAA_ONLY
    }

    fn check(&self, document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
        let findings = document
            .find_all(&["img"])
            .into_iter()
            .filter(|img| {
                img.attr("style")
                    .map(|s| InlineStyle::new(s).contains("background-color"))
                    .unwrap_or(false)
            })
            .map(|img| {
                Finding::new(
                    self.id(),
                    Severity::High,
                    "Image background should have sufficient contrast with text.",
                    "Text over images must have sufficient contrast with the background to be readable by users with visual impairments. This is crucial for users with low vision or color blindness.",
                )
                .with_wcag("1.4.6")
                .with_element(img.outer_html())
            })
            .collect();
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt_findings(html: &str) -> Vec<Finding> {
        MissingAltRule
            .check(&Document::parse(html), WcagLevel::AA)
            .unwrap()
    }

    #[test]
    fn test_accessible_images() {
        let html = r#"
            <html>
            <body>
                <img src="logo.png" alt="Company logo">
                <img src="chart.png" alt="Bar chart showing Q4 revenue growth of 15%">
            </body>
            </html>
        "#;
        assert!(alt_findings(html).is_empty());
    }

    #[test]
    fn test_missing_alt() {
        let findings = alt_findings(r#"<img src="photo.jpg">"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].rule_id, "missing-alt");
        assert!(findings[0]
            .element
            .as_deref()
            .unwrap_or_default()
            .contains("photo.jpg"));
    }

    #[test]
    fn test_empty_alt_is_flagged() {
        let findings = alt_findings(r#"<img src="divider.png" alt="">"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_multiple_images_in_document_order() {
        let html = r#"
            <img src="a.png">
            <img src="b.png" alt="photo of the team">
            <img src="c.png" alt="">
        "#;
        let findings = alt_findings(html);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].element.as_deref().unwrap_or_default().contains("a.png"));
        assert!(findings[1].element.as_deref().unwrap_or_default().contains("c.png"));
    }

    #[test]
    fn test_image_background_only_at_aaa() {
        let doc = Document::parse(
            r#"<img src="hero.png" alt="Hero" style="background-color: #eee">
               <img src="plain.png" alt="Plain" style="border: 0">"#,
        );
        let rule = ImageBackgroundRule;
        assert!(rule.evaluate(&doc, WcagLevel::AA).unwrap().is_empty());

        let findings = rule.evaluate(&doc, WcagLevel::AAA).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert!(findings[0].element.as_deref().unwrap_or_default().contains("hero.png"));
    }
}
