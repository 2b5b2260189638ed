// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResultsError;

/// A single test outcome extracted from a `[RESULT]` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Test name, exactly as written before the `: ` separator
    pub name: String,
    /// Terminal status of the test
    pub status: Status,
    /// Duration in whole seconds
    #[serde(rename = "duration")]
    pub duration_secs: u64,
}

impl ResultRecord {
    /// Create a new record
    #[must_use]
    pub fn new(name: impl Into<String>, status: Status, duration_secs: u64) -> Self {
        Self {
            name: name.into(),
            status,
            duration_secs,
        }
    }
}

/// Possible test statuses reported by the test runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Test passed
    Pass,
    /// Test failed
    Fail,
    /// Test was skipped
    Skip,
    /// Test timed out
    Timeout,
}

impl Status {
    /// All statuses, in the order the JSON export lists them
    pub const ALL: [Status; 4] = [Status::Pass, Status::Fail, Status::Timeout, Status::Skip];

    /// The token used in log lines and in the report
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Skip => "SKIP",
            Status::Timeout => "TIMEOUT",
        }
    }

    /// Single-character marker shown next to a test in the report
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Status::Pass => "✓",
            Status::Fail => "✗",
            Status::Timeout => "⏱",
            Status::Skip => "⊘",
        }
    }

    /// Whether this status makes the overall run fail
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Fail | Status::Timeout)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            "SKIP" => Ok(Status::Skip),
            "TIMEOUT" => Ok(Status::Timeout),
            other => Err(ResultsError::UnknownStatus {
                token: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("PASS".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("FAIL".parse::<Status>().unwrap(), Status::Fail);
        assert_eq!("SKIP".parse::<Status>().unwrap(), Status::Skip);
        assert_eq!("TIMEOUT".parse::<Status>().unwrap(), Status::Timeout);
    }

    #[test]
    fn test_status_from_str_is_case_sensitive() {
        let err = "pass".parse::<Status>().unwrap_err();
        assert!(matches!(err, ResultsError::UnknownStatus { ref token } if token == "pass"));
    }

    #[test]
    fn test_status_display_respects_padding() {
        assert_eq!(format!("{:<8}|", Status::Pass), "PASS    |");
        assert_eq!(format!("{:<8}|", Status::Timeout), "TIMEOUT |");
    }

    #[test]
    fn test_failure_statuses() {
        assert!(Status::Fail.is_failure());
        assert!(Status::Timeout.is_failure());
        assert!(!Status::Pass.is_failure());
        assert!(!Status::Skip.is_failure());
    }

    #[test]
    fn test_record_serialization() {
        let record = ResultRecord::new("Rust Build", Status::Pass, 45);
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"name": "Rust Build", "status": "PASS", "duration": 45})
        );

        let back: ResultRecord = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, record);
    }
}
