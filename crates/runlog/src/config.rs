// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the runlog analyzer
//!
//! Every option has a default, so running `runlog` with no arguments
//! analyzes the newest `test-results/test-results-*.log` and writes the
//! report and JSON export next to it.

use std::path::PathBuf;

use clap::Parser;

/// Default directory searched for test logs
pub const DEFAULT_LOG_DIR: &str = "test-results";
/// File name of the text report inside the log directory
pub const REPORT_FILE_NAME: &str = "analysis-report.txt";
/// File name of the JSON export inside the log directory
pub const JSON_FILE_NAME: &str = "results.json";

/// Runlog - analysis report for migration test logs
#[derive(Parser, Debug, Clone)]
#[command(name = "runlog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing `test-results-*.log` files
    ///
    /// The report and JSON export are written here unless overridden.
    #[arg(short, long, env = "RUNLOG_DIR", default_value = DEFAULT_LOG_DIR)]
    pub dir: PathBuf,

    /// Analyze this log file instead of the newest one in the directory
    #[arg(short, long, env = "RUNLOG_LOG")]
    pub log: Option<PathBuf>,

    /// Where to write the text report
    ///
    /// Defaults to <DIR>/analysis-report.txt.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Where to write the JSON export
    ///
    /// Defaults to <DIR>/results.json.
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_LOG_DIR),
            log: None,
            report: None,
            json: None,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Configuration rooted at a different log directory
    #[must_use]
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Get the report path, using `<dir>/analysis-report.txt` if not specified
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| self.dir.join(REPORT_FILE_NAME))
    }

    /// Get the JSON export path, using `<dir>/results.json` if not specified
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.json
            .clone()
            .unwrap_or_else(|| self.dir.join(JSON_FILE_NAME))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
