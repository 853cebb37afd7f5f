// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit orchestration.
//!
//! Runs every applicable rule in registry order over one parsed document,
//! concatenates their findings, and derives the summary and compliance
//! score. A rule that errors or panics is logged and contributes nothing;
//! the remaining rules still run.

use crate::config::{Config, ScoringPolicy};
use crate::document::Document;
use crate::error::{AuditError, Result};
use crate::model::{Finding, Report, Severity, WcagLevel};
use crate::rules::{self, Rule};
use chrono::Utc;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Runs rules over documents
pub struct Auditor {
    rules: Vec<Box<dyn Rule>>,
    scoring: ScoringPolicy,
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Auditor {
    /// Auditor with the full rule registry
    pub fn new(config: &Config) -> Self {
        Self::with_rules(rules::registry(), config.audit.scoring)
    }

    /// Auditor with a custom rule list, evaluated in the given order
    pub fn with_rules(rules: Vec<Box<dyn Rule>>, scoring: ScoringPolicy) -> Self {
        Self { rules, scoring }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    /// Audit markup text
    pub fn audit(&self, source_text: &str, source: Option<&str>, level: WcagLevel) -> Report {
        let document = Document::parse(source_text);
        self.audit_document(&document, source, level)
    }

    /// Audit raw bytes; fails if they are not text
    pub fn audit_bytes(
        &self,
        bytes: &[u8],
        source: Option<&str>,
        level: WcagLevel,
    ) -> Result<Report> {
        let document = Document::from_bytes(bytes)?;
        Ok(self.audit_document(&document, source, level))
    }

    /// Audit an already parsed document
    pub fn audit_document(
        &self,
        document: &Document,
        source: Option<&str>,
        level: WcagLevel,
    ) -> Report {
        info!(
            source = source.unwrap_or("<inline>"),
            level = %level,
            "Starting accessibility audit"
        );

        let mut findings = Vec::new();
        for rule in self.rules.iter().filter(|r| r.applies_to_level(level)) {
            match run_isolated(rule.as_ref(), document, level) {
                Ok(rule_findings) => {
                    debug!(rule = rule.id(), findings = rule_findings.len(), "Rule complete");
                    findings.extend(rule_findings);
                }
                Err(e) => warn!(rule = rule.id(), "Rule skipped: {}", e),
            }
        }

        let summary = summarize(&findings);
        let compliance_score = self.scoring.score(findings.len());
        info!(
            findings = findings.len(),
            score = compliance_score,
            "Audit complete"
        );

        Report {
            source: source.map(String::from),
            level,
            findings,
            summary,
            compliance_score,
            generated_at: Utc::now(),
        }
    }
}

/// Audit markup with the default configuration
pub fn audit(source_text: &str, source: Option<&str>, level: WcagLevel) -> Report {
    Auditor::default().audit(source_text, source, level)
}

/// "Found {n} accessibility issues. High severity: {h}."
pub fn summarize(findings: &[Finding]) -> String {
    let high = findings
        .iter()
        .filter(|f| f.severity == Severity::High)
        .count();
    format!(
        "Found {} accessibility issues. High severity: {}.",
        findings.len(),
        high
    )
}

/// Evaluate one rule, turning a panic into an error
fn run_isolated(rule: &dyn Rule, document: &Document, level: WcagLevel) -> Result<Vec<Finding>> {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(document, level))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panicked".to_string());
            Err(AuditError::Rule {
                rule: rule.id().to_string(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{images::MissingAltRule, ALL_LEVELS};

    struct FailingRule;

    impl Rule for FailingRule {
        fn id(&self) -> &'static str {
            "failing"
        }
        fn finding_ids(&self) -> &'static [&'static str] {
            &[]
        }
        fn name(&self) -> &'static str {
            "Failing"
        }
        fn description(&self) -> &'static str {
            "Always errors"
        }
        fn levels(&self) -> &'static [WcagLevel] {
            ALL_LEVELS
        }
        fn check(&self, _document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
            Err(AuditError::Rule {
                rule: self.id().to_string(),
                message: "boom".to_string(),
            })
        }
    }

    struct PanickingRule;

    impl Rule for PanickingRule {
        fn id(&self) -> &'static str {
            "panicking"
        }
        fn finding_ids(&self) -> &'static [&'static str] {
            &[]
        }
        fn name(&self) -> &'static str {
            "Panicking"
        }
        fn description(&self) -> &'static str {
            "Always panics"
        }
        fn levels(&self) -> &'static [WcagLevel] {
            ALL_LEVELS
        }
        fn check(&self, _document: &Document, _level: WcagLevel) -> Result<Vec<Finding>> {
            panic!("rule exploded")
        }
    }

    #[test]
    fn test_empty_document() {
        for level in WcagLevel::ALL {
            let report = audit("<p>Plain text</p>", None, level);
            assert!(report.findings.is_empty());
            assert_eq!(report.compliance_score, 100);
            assert_eq!(report.summary, "Found 0 accessibility issues. High severity: 0.");
        }
    }

    #[test]
    fn test_summary_counts_high() {
        let report = audit(r#"<img src="a.png"><img src="b.png">"#, None, WcagLevel::A);
        assert_eq!(report.summary, "Found 2 accessibility issues. High severity: 2.");
        assert_eq!(report.compliance_score, 80);
    }

    #[test]
    fn test_unweighted_scoring() {
        let auditor = Auditor::with_rules(rules::registry(), ScoringPolicy::Unweighted);
        let report = auditor.audit(r#"<img src="a.png">"#, None, WcagLevel::A);
        assert_eq!(report.compliance_score, 99);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let html = "<img src=x>".repeat(25);
        let report = audit(&html, None, WcagLevel::A);
        assert_eq!(report.findings.len(), 25);
        assert_eq!(report.compliance_score, 0);
    }

    #[test]
    fn test_failing_rules_are_isolated() {
        let auditor = Auditor::with_rules(
            vec![
                Box::new(FailingRule),
                Box::new(PanickingRule),
                Box::new(MissingAltRule),
            ],
            ScoringPolicy::Weighted,
        );
        let report = auditor.audit(r#"<img src="a.png">"#, None, WcagLevel::AA);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].rule_id, "missing-alt");
    }

    #[test]
    fn test_run_isolated_reports_panic_message() {
        let doc = Document::parse("");
        match run_isolated(&PanickingRule, &doc, WcagLevel::A) {
            Err(AuditError::Rule { rule, message }) => {
                assert_eq!(rule, "panicking");
                assert_eq!(message, "rule exploded");
            }
            other => panic!("expected rule error, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_bytes_rejects_binary() {
        let auditor = Auditor::default();
        assert!(matches!(
            auditor.audit_bytes(&[0x00, 0x9f, 0x92, 0x96], None, WcagLevel::AA),
            Err(AuditError::Parse(_))
        ));
        let report = auditor
            .audit_bytes(b"<img src=a.png>", Some("page.html"), WcagLevel::AA)
            .unwrap();
        assert_eq!(report.source.as_deref(), Some("page.html"));
    }

    #[test]
    fn test_rule_order_then_document_order() {
        let html = r#"<a href="/x"></a><img src="late.png">"#;
        let report = audit(html, None, WcagLevel::A);
        let ids: Vec<_> = report.findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["missing-alt", "empty-link", "missing-tabindex"]);
    }
}
