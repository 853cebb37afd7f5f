// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering.
//!
//! Supports multiple output formats:
//! - Text: plain audit report with one entry per finding
//! - HTML: standalone document, input for PDF converters
//! - JSON: the serialized report for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::error::{AuditError, Result};
use crate::model::{Report, Severity};
use serde::{Deserialize, Serialize};

/// Output format for reports. Deserializes through `FromStr`, so config
/// files accept the same aliases as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// HTML document (PDF-ready)
    Html,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = AuditError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            // the HTML rendering is what gets handed to a PDF converter
            "html" | "pdf" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(AuditError::InvalidFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = AuditError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}

/// Render a report in the given format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Html => Ok(render_html(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Sarif => render_sarif(std::slice::from_ref(report)),
    }
}

/// Render several reports as one document
pub fn render_many(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Sarif => render_sarif(reports),
        OutputFormat::Text | OutputFormat::Html => {
            let rendered = reports
                .iter()
                .map(|r| render(r, format))
                .collect::<Result<Vec<_>>>()?;
            Ok(rendered.join("\n"))
        }
    }
}

/// Generate plain text report
fn render_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("Accessibility Audit Report\n\n");
    output.push_str(&format!("URL: {}\n", report.source_label()));
    output.push_str(&format!("Level: {}\n", report.level));
    output.push_str(&format!("Compliance score: {}\n", report.compliance_score));
    output.push_str(&format!("Summary: {}\n\n", report.summary));

    if report.findings.is_empty() {
        output.push_str("No issues found.\n");
        return output;
    }

    output.push_str("Issues:\n");
    for finding in &report.findings {
        output.push_str(&format!(
            "- {} (Severity: {})\n",
            finding.issue, finding.severity
        ));
        output.push_str(&format!("  Description: {}\n", finding.description));
    }

    output
}

/// Generate an HTML document suitable for PDF conversion
fn render_html(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str("<title>Accessibility Audit Report</title>\n</head>\n<body>\n");
    output.push_str("<h1>Accessibility Audit Report</h1>\n");
    output.push_str(&format!(
        "<p><strong>URL:</strong> {}</p>\n",
        escape_html(report.source_label())
    ));
    output.push_str(&format!(
        "<p><strong>Level:</strong> {} &middot; <strong>Compliance score:</strong> {}</p>\n",
        report.level, report.compliance_score
    ));
    output.push_str(&format!(
        "<p><strong>Summary:</strong> {}</p>\n",
        escape_html(&report.summary)
    ));
    output.push_str("<h2>Issues</h2>\n");

    if report.findings.is_empty() {
        output.push_str("<p>No issues found.</p>\n");
    } else {
        output.push_str("<ul>\n");
        for finding in &report.findings {
            output.push_str(&format!(
                "<li>{} (Severity: {})<br>Description: {}</li>\n",
                escape_html(&finding.issue),
                finding.severity,
                escape_html(&finding.description)
            ));
        }
        output.push_str("</ul>\n");
    }

    output.push_str("</body>\n</html>\n");
    output
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

/// Generate SARIF report; one run, results from every report
fn render_sarif(reports: &[Report]) -> Result<String> {
    let results: Vec<SarifResult> = reports
        .iter()
        .flat_map(|report| report.findings.iter().map(move |f| (report, f)))
        .map(|(report, f)| {
            let level = match f.severity {
                Severity::High => "error",
                Severity::Medium => "warning",
                Severity::Low => "note",
            };

            let locations = report
                .source
                .iter()
                .map(|source| SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: source.clone(),
                        },
                    },
                })
                .collect();

            SarifResult {
                rule_id: f.rule_id.clone(),
                level: level.to_string(),
                message: SarifMessage {
                    text: format!("{} {}", f.issue, f.description),
                },
                locations,
            }
        })
        .collect();

    let sarif = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    Ok(serde_json::to_string_pretty(&sarif)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Finding, WcagLevel};
    use chrono::Utc;

    fn sample_report(findings: Vec<Finding>) -> Report {
        Report {
            source: Some("https://example.com/".to_string()),
            level: WcagLevel::AA,
            summary: format!("Found {} accessibility issues. High severity: 0.", findings.len()),
            compliance_score: 100 - 10 * findings.len() as u32,
            findings,
            generated_at: Utc::now(),
        }
    }

    fn sample_finding() -> Finding {
        Finding::new(
            "empty-link",
            Severity::Medium,
            "Empty <a> tag without aria-label.",
            "Links must have descriptive text & context.",
        )
        .with_element("<a href=\"/\"></a>")
    }

    #[test]
    fn test_text_report_empty() {
        let report = render(&sample_report(Vec::new()), OutputFormat::Text).unwrap();
        assert!(report.starts_with("Accessibility Audit Report\n\n"));
        assert!(report.contains("URL: https://example.com/\n"));
        assert!(report.contains("No issues found."));
    }

    #[test]
    fn test_text_report_with_findings() {
        let report = render(&sample_report(vec![sample_finding()]), OutputFormat::Text).unwrap();
        assert!(report.contains("Issues:\n"));
        assert!(report.contains("- Empty <a> tag without aria-label. (Severity: Medium)\n"));
        assert!(report.contains("  Description: Links must have descriptive text & context.\n"));
    }

    #[test]
    fn test_text_report_inline_source() {
        let mut report = sample_report(Vec::new());
        report.source = None;
        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.contains("URL: N/A\n"));
    }

    #[test]
    fn test_html_report_escapes() {
        let report = render(&sample_report(vec![sample_finding()]), OutputFormat::Html).unwrap();
        assert!(report.starts_with("<!DOCTYPE html>"));
        assert!(report.contains("<li>Empty &lt;a&gt; tag without aria-label. (Severity: Medium)"));
        assert!(report.contains("descriptive text &amp; context."));
    }

    #[test]
    fn test_json_report() {
        let report = render(&sample_report(vec![sample_finding()]), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert!(parsed["issues"].is_array());
        assert_eq!(parsed["issues"][0]["severity"], "Medium");
        assert_eq!(parsed["url"], "https://example.com/");
    }

    #[test]
    fn test_sarif_report() {
        let report = render(&sample_report(vec![sample_finding()]), OutputFormat::Sarif).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        let result = &parsed["runs"][0]["results"][0];
        assert_eq!(result["ruleId"], "empty-link");
        assert_eq!(result["level"], "warning");
        assert_eq!(
            result["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "https://example.com/"
        );
        assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "wcag-audit");
    }

    #[test]
    fn test_render_many() {
        let mut second = sample_report(Vec::new());
        second.source = Some("other.html".to_string());
        let reports = vec![sample_report(vec![sample_finding()]), second];

        let json = render_many(&reports, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));

        let sarif = render_many(&reports, OutputFormat::Sarif).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&sarif).expect("valid JSON");
        assert_eq!(parsed["runs"].as_array().map(|a| a.len()), Some(1));
        assert_eq!(parsed["runs"][0]["results"].as_array().map(|a| a.len()), Some(1));

        let text = render_many(&reports, OutputFormat::Text).unwrap();
        assert_eq!(text.matches("Accessibility Audit Report").count(), 2);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(AuditError::InvalidFormat(_))
        ));
    }
}
