// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for wcag-audit

use crate::error::{AuditError, Result};
use crate::model::WcagLevel;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wcag-audit.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Audit behaviour
    #[serde(default)]
    pub audit: AuditConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Audit behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Conformance level used when none is requested
    #[serde(default)]
    pub level: WcagLevel,

    /// How findings reduce the compliance score
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            level: WcagLevel::AA,
            scoring: ScoringPolicy::Weighted,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

/// Compliance score penalty per finding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// 10 points per finding
    #[default]
    Weighted,
    /// 1 point per finding
    Unweighted,
}

impl ScoringPolicy {
    /// Points deducted per finding
    pub fn penalty_per_finding(&self) -> u32 {
        match self {
            ScoringPolicy::Weighted => 10,
            ScoringPolicy::Unweighted => 1,
        }
    }

    /// Score in 0..=100 for a finding count
    pub fn score(&self, finding_count: usize) -> u32 {
        let count = u32::try_from(finding_count).unwrap_or(u32::MAX);
        let penalty = count.saturating_mul(self.penalty_per_finding());
        100u32.saturating_sub(penalty)
    }
}

/// Load configuration; a missing file yields defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write the default configuration, creating parent directories
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(AuditError::Config(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    Ok(())
}
