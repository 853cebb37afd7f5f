// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for wcag-audit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    /// Input could not be interpreted as markup text at all
    #[error("Parse error: {0}")]
    Parse(String),

    /// Inline style present but not splittable into color declarations
    #[error("Malformed style: {0}")]
    MalformedStyle(String),

    /// Color token not resolvable to RGB
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid conformance level: {0} (expected A, AA or AAA)")]
    InvalidLevel(String),

    #[error("Invalid output format: {0} (expected text, html, json or sarif)")]
    InvalidFormat(String),

    #[error("Rule {rule} failed: {message}")]
    Rule { rule: String, message: String },

    #[error("No report available. Perform an audit first.")]
    NoReport,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
