// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report model: severities, conformance levels, findings and the audit report.
//!
//! The serialized shape keeps the keys existing consumers read
//! (`url`, `issues[].issue`, `issues[].element`, `summary`, `compliance_score`).

use crate::error::AuditError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity assigned by the rule that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// WCAG conformance level. Serialized as "A"/"AA"/"AAA"; parsing ignores case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    #[default]
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl WcagLevel {
    pub const ALL: [WcagLevel; 3] = [WcagLevel::A, WcagLevel::AA, WcagLevel::AAA];
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(WcagLevel::A),
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            _ => Err(AuditError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for WcagLevel {
    type Error = AuditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WcagLevel> for String {
    fn from(level: WcagLevel) -> Self {
        level.to_string()
    }
}

/// A single violation emitted by one rule invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier of the rule that fired (e.g., "missing-alt")
    pub rule_id: String,
    /// Short human-readable statement of the issue
    pub issue: String,
    /// What is wrong and who it affects
    pub description: String,
    /// Severity fixed by the rule
    pub severity: Severity,
    /// Serialized offending node, composite value, or nothing
    pub element: Option<String>,
    /// WCAG success criterion reference (e.g., "1.1.1")
    pub wcag_criterion: Option<String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(rule_id: &str, severity: Severity, issue: &str, description: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            issue: issue.to_string(),
            description: description.to_string(),
            severity,
            element: None,
            wcag_criterion: None,
        }
    }

    /// Attach the offending element snippet
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Set the WCAG criterion
    pub fn with_wcag(mut self, criterion: &str) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self
    }
}

/// The immutable outcome of one audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// URL or path of the audited document; `None` for inline markup
    #[serde(rename = "url")]
    pub source: Option<String>,
    /// Level the audit ran at
    pub level: WcagLevel,
    /// Findings in rule order, then document order
    #[serde(rename = "issues")]
    pub findings: Vec<Finding>,
    pub summary: String,
    pub compliance_score: u32,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Number of findings with the given severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    /// Findings carrying the given `rule_id` (see `Rule::finding_ids`)
    pub fn by_rule(&self, rule_id: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.rule_id == rule_id).collect()
    }

    /// Whether any High severity finding exists
    pub fn has_high_severity(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::High)
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Display label for the audited source
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(WcagLevel::A < WcagLevel::AA);
        assert!(WcagLevel::AA < WcagLevel::AAA);
        assert_eq!(WcagLevel::default(), WcagLevel::AA);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("A".parse::<WcagLevel>().unwrap(), WcagLevel::A);
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::AA);
        assert_eq!(" AAA ".parse::<WcagLevel>().unwrap(), WcagLevel::AAA);
        assert!(matches!(
            "AAAA".parse::<WcagLevel>(),
            Err(AuditError::InvalidLevel(_))
        ));
        assert!("".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn test_severity_display_and_serde() {
        assert_eq!(Severity::High.to_string(), "High");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
        assert!(Severity::Low < Severity::High);
    }

    #[test]
    fn test_report_wire_keys() {
        let report = Report {
            source: Some("https://example.com".to_string()),
            level: WcagLevel::AA,
            findings: vec![Finding::new("missing-alt", Severity::High, "Missing alt", "desc")
                .with_element("<img>")],
            summary: "Found 1 accessibility issues. High severity: 1.".to_string(),
            compliance_score: 90,
            generated_at: Utc::now(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["issues"][0]["issue"], "Missing alt");
        assert_eq!(value["issues"][0]["element"], "<img>");
        assert_eq!(value["issues"][0]["severity"], "High");
        assert_eq!(value["compliance_score"], 90);
        assert!(report.has_high_severity());
        assert_eq!(report.count_by_severity(Severity::High), 1);
        assert_eq!(report.by_rule("missing-alt").len(), 1);
    }
}
