// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON export of the aggregated run
//!
//! Unlike the text report, the export carries every error and warning line.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use runlog_results::{ResultsByStatus, RunSummary, Stats};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RunError;

/// Document written to `results.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Wall-clock time of the export
    pub timestamp: DateTime<Local>,
    /// Counters
    pub stats: Stats,
    /// Every record, grouped by status
    pub results_by_status: ResultsByStatus,
    /// Last duration per test name
    pub build_times: IndexMap<String, u64>,
    /// All error lines
    pub errors: Vec<String>,
    /// All warning lines
    pub warnings: Vec<String>,
}

impl ExportDocument {
    /// Snapshot a summary at the given time
    #[must_use]
    pub fn new(summary: &RunSummary, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            stats: summary.stats,
            results_by_status: summary.results.clone(),
            build_times: summary.build_times.clone(),
            errors: summary.errors.clone(),
            warnings: summary.warnings.clone(),
        }
    }

    /// Pretty-printed JSON with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns `RunError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a previously exported document
    ///
    /// # Errors
    ///
    /// Returns `RunError::Json` if the input is not a valid export.
    pub fn from_json(json: &str) -> Result<Self, RunError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serialize `summary` and write it to `path`
///
/// # Errors
///
/// Returns `RunError::Json` if serialization fails and `RunError::Write` if
/// the file cannot be written.
pub fn export_json(summary: &RunSummary, path: &Path) -> Result<(), RunError> {
    let json = ExportDocument::new(summary, Local::now()).to_json()?;
    fs::write(path, json).map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "JSON export written");
    Ok(())
}
