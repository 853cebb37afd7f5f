// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-audit - automated first-pass WCAG accessibility audits
//!
//! Parses an HTML document, runs a fixed set of accessibility rules scoped
//! by conformance level (A, AA, AAA), and produces a report with findings,
//! a summary line and a 0-100 compliance score.
//!
//! ## Rules
//!
//! - **Missing alt text** (1.1.1): `<img>` without non-empty `alt`
//! - **Empty link text** (2.4.4): `<a>` without text or `aria-label`
//! - **Heading order** (1.3.1): headings stepping back in order
//! - **Text contrast** (1.4.3/1.4.6): inline color pairs below threshold
//! - **Form controls** (3.3.2): controls without `id` or accessible name
//! - **Scalable text** (1.4.4): body font size missing or in `px`
//! - **Keyboard** (2.1.1/4.1.2): missing `tabindex`, unexpected ARIA roles
//! - **Color-only links** (1.4.1): links styled with color
//! - **Form labels** (3.3.2): forms without a `<label>`
//! - **Image background** (1.4.6): images with a background color
//!
//! ```
//! use wcag_audit::{audit, WcagLevel};
//!
//! let report = audit(r#"<img src="logo.png">"#, None, WcagLevel::AA);
//! assert_eq!(report.findings.len(), 1);
//! assert_eq!(report.compliance_score, 90);
//! ```

pub mod audit;
pub mod config;
pub mod contrast;
pub mod document;
pub mod error;
pub mod model;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod store;
pub mod style;

pub use audit::{audit, Auditor};
pub use config::{Config, ScoringPolicy};
pub use error::{AuditError, Result};
pub use model::{Finding, Report, Severity, WcagLevel};
pub use report::{render, OutputFormat};
pub use store::ReportStore;
