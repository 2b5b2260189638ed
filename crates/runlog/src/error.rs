// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for runlog

use std::path::PathBuf;

use runlog_results::ResultsError;
use thiserror::Error;

/// Errors raised while locating, reading or writing analysis files
#[derive(Debug, Error)]
pub enum RunError {
    /// The log directory does not exist
    #[error("{} directory not found", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The log directory holds no `test-results-*.log` file
    #[error("No test log files found in {}", .0.display())]
    NoLogFiles(PathBuf),

    /// The selected log could not be read
    #[error("Error parsing log {}: {source}", .path.display())]
    Parse {
        /// Log file being read
        path: PathBuf,
        /// Underlying failure
        source: ResultsError,
    },

    /// An output file could not be written
    #[error("{}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Console output could not be written
    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    /// Whether the error comes from locating the log rather than reading it
    #[must_use]
    pub fn is_discovery(&self) -> bool {
        matches!(self, RunError::DirectoryNotFound(_) | RunError::NoLogFiles(_))
    }
}
