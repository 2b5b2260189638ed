// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! One analysis run: discover, parse, report, export
//!
//! Output files are written in order (report, then JSON). A failure to write
//! either is reported and the run carries on, as does a failing console; the
//! exit status depends on the test results unless the console failed.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use runlog_results::RunSummary;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::RunError;
use crate::export::export_json;
use crate::loader::{find_latest_log, load_log};
use crate::report::{ReportHeader, render_report, save_report};

/// Result of a completed analysis
#[derive(Debug)]
pub struct RunOutcome {
    /// Log that was analyzed
    pub log_file: PathBuf,
    /// Aggregated results
    pub summary: RunSummary,
    /// Rendered report text
    pub report: String,
    /// Whether the report file was written
    pub report_saved: bool,
    /// Whether the JSON export was written
    pub json_exported: bool,
}

impl RunOutcome {
    /// True when no test failed or timed out
    #[must_use]
    pub fn passed(&self) -> bool {
        self.summary.all_passed()
    }

    /// Process exit status for this outcome
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Select the log to analyze: the explicit `--log`, or the newest in the directory
///
/// # Errors
///
/// Returns the discovery errors of [`find_latest_log`].
pub fn resolve_log_file(config: &Config) -> Result<PathBuf, RunError> {
    match &config.log {
        Some(path) => Ok(path.clone()),
        None => find_latest_log(&config.dir),
    }
}

/// Console sink that keeps the first write failure instead of stopping the run
struct Console<'a, W: Write> {
    out: &'a mut W,
    failure: Option<io::Error>,
}

impl<'a, W: Write> Console<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, failure: None }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!(error = %e, "Could not write to console");
            self.failure = Some(e);
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.failure {
            Some(e) => Err(e),
            None => self.out.flush(),
        }
    }
}

/// Run one analysis, writing progress lines and the report to `out`
///
/// The report file and JSON export are written even if `out` fails.
///
/// # Errors
///
/// Returns an error if no log can be found or read, or, once both output
/// files have been attempted, if `out` could not be written. Failing to save
/// the report or JSON export is not an error.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunOutcome, RunError> {
    let mut console = Console::new(out);

    let log_file = resolve_log_file(config)?;
    info!(path = %log_file.display(), "Analyzing test log");
    console.line(format_args!("📂 Analyzing log: {}", log_file.display()));
    console.line(format_args!(""));

    let summary = load_log(&log_file)?;

    let report = render_report(
        &summary,
        &ReportHeader {
            generated_at: Local::now().naive_local(),
            log_file: &log_file,
        },
    );
    console.line(format_args!("{report}"));

    let report_path = config.report_path();
    let report_saved = match save_report(&report, &report_path) {
        Ok(()) => {
            console.line(format_args!("\n💾 Report saved to: {}", report_path.display()));
            true
        }
        Err(e) => {
            warn!(error = %e, "Could not save report");
            console.line(format_args!("⚠️  Could not save report: {e}"));
            false
        }
    };

    let json_path = config.json_path();
    let json_exported = match export_json(&summary, &json_path) {
        Ok(()) => {
            console.line(format_args!("✓ JSON results exported to: {}", json_path.display()));
            true
        }
        Err(e) => {
            warn!(error = %e, "Could not export JSON");
            console.line(format_args!("✗ Could not export JSON: {e}"));
            false
        }
    };

    info!(
        total = summary.stats.total_tests,
        failed = summary.stats.failed,
        timeout = summary.stats.timeout,
        "Analysis complete"
    );

    console.finish()?;

    Ok(RunOutcome {
        log_file,
        summary,
        report,
        report_saved,
        json_exported,
    })
}
