// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test log line classification and result extraction
//!
//! The log is line oriented. Each line is classified by the first marker it
//! contains, checked in this order:
//!
//! - `[RESULT]`: `<name>: <PASS|FAIL|SKIP|TIMEOUT> (<N>s)`
//! - `[ERROR]`: kept verbatim (trimmed)
//! - `[WARN]`: kept verbatim (trimmed)
//!
//! Anything else is ignored. A `[RESULT]` line that does not fit the result
//! shape is dropped without being reported anywhere.
//!
//! # Example
//!
//! ```
//! use runlog_results::parser::parse_log;
//!
//! let log = "[RESULT] Rust Build: PASS (45s)\n[ERROR] disk full";
//! let summary = parse_log(log);
//! assert_eq!(summary.stats.passed, 1);
//! assert_eq!(summary.errors, vec!["[ERROR] disk full"]);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ResultsError;
use crate::result::{ResultRecord, Status};
use crate::summary::RunSummary;

/// Marker for result lines
pub const RESULT_MARKER: &str = "[RESULT]";
/// Marker for error lines
pub const ERROR_MARKER: &str = "[ERROR]";
/// Marker for warning lines
pub const WARN_MARKER: &str = "[WARN]";

// Example: [2025-01-01 12:00:00] [RESULT] Test Name: PASS (120s)
static RESULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[RESULT\]\s+(.+?):\s+(PASS|FAIL|SKIP|TIMEOUT)\s+\(([0-9]+)s\)")
        .expect("result pattern is valid")
});

impl FromStr for ResultRecord {
    type Err = ResultsError;

    /// Extract a record from a full `[RESULT]` log line
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = RESULT_RE
            .captures(line)
            .ok_or_else(|| ResultsError::InvalidFormat {
                message: format!("not a result line: {}", line.trim()),
            })?;

        let status: Status = caps[2].parse()?;
        let duration_secs = caps[3]
            .parse::<u64>()
            .map_err(|e| ResultsError::InvalidFormat {
                message: format!("duration {}: {e}", &caps[3]),
            })?;

        Ok(ResultRecord::new(&caps[1], status, duration_secs))
    }
}

/// How a single log line was classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A well-formed result line
    Result(ResultRecord),
    /// A `[RESULT]` line that did not match the result shape
    MalformedResult,
    /// An `[ERROR]` line
    Error(String),
    /// A `[WARN]` line
    Warning(String),
    /// Any other line
    Ignored,
}

/// Classify one line without touching any state
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    if line.contains(RESULT_MARKER) {
        line.parse::<ResultRecord>()
            .map_or(LineKind::MalformedResult, LineKind::Result)
    } else if line.contains(ERROR_MARKER) {
        LineKind::Error(line.trim().to_string())
    } else if line.contains(WARN_MARKER) {
        LineKind::Warning(line.trim().to_string())
    } else {
        LineKind::Ignored
    }
}

/// Incremental parser folding log lines into a [`RunSummary`]
#[derive(Debug, Default)]
pub struct LogParser {
    summary: RunSummary,
    lines_seen: usize,
    malformed: usize,
}

impl LogParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a line and fold it into the running summary
    ///
    /// Returns the extracted record when the line was a valid result line.
    pub fn process_line(&mut self, line: &str) -> Option<&ResultRecord> {
        self.lines_seen += 1;
        match classify_line(line) {
            LineKind::Result(record) => {
                let status = record.status;
                self.summary.record(record);
                self.summary.results.get(status).last()
            }
            LineKind::MalformedResult => {
                self.malformed += 1;
                None
            }
            LineKind::Error(text) => {
                self.summary.push_error(text);
                None
            }
            LineKind::Warning(text) => {
                self.summary.push_warning(text);
                None
            }
            LineKind::Ignored => None,
        }
    }

    /// The summary accumulated so far
    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Finalize and return the summary
    #[must_use]
    pub fn finish(self) -> RunSummary {
        debug!(
            lines = self.lines_seen,
            results = self.summary.stats.total_tests,
            malformed = self.malformed,
            errors = self.summary.errors.len(),
            warnings = self.summary.warnings.len(),
            "Finished parsing test log"
        );
        self.summary
    }
}

/// Split a log into lines on `\n`, `\r\n` or a lone `\r`
///
/// Empty lines are skipped; they could never be classified anyway.
pub fn log_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r']).filter(|line| !line.is_empty())
}

/// Parse a complete log held in memory
#[must_use]
pub fn parse_log(content: &str) -> RunSummary {
    let mut parser = LogParser::new();
    for line in log_lines(content) {
        parser.process_line(line);
    }
    parser.finish()
}

/// Parse a log from any reader
///
/// # Errors
///
/// Returns `ResultsError::Io` if reading fails or the input is not UTF-8.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<RunSummary, ResultsError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_log(&content))
}

/// Parse the log file at `path`
///
/// # Errors
///
/// Returns `ResultsError::Io` if the file cannot be opened or read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RunSummary, ResultsError> {
    let file = File::open(path.as_ref())?;
    parse_reader(file)
}
