// SPDX-License-Identifier: PMPL-1.0-or-later
//! Latest-report slot.
//!
//! Holds at most one report. Callers own the store and pass it to whatever
//! records or serves reports; each `record` replaces the previous report.

use crate::error::{AuditError, Result};
use crate::model::Report;
use crate::report::{self, OutputFormat};
use std::sync::{PoisonError, RwLock};

/// Holds the most recent report
#[derive(Debug, Default)]
pub struct ReportStore {
    latest: RwLock<Option<Report>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored report, returning the previous one
    pub fn record(&self, report: Report) -> Option<Report> {
        let mut slot = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        slot.replace(report)
    }

    /// Clone of the most recent report
    pub fn latest(&self) -> Option<Report> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Render the most recent report
    pub fn render_latest(&self, format: OutputFormat) -> Result<String> {
        let slot = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        let report = slot.as_ref().ok_or(AuditError::NoReport)?;
        report::render(report, format)
    }

    pub fn clear(&self) {
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
