// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Aggregated run state
//!
//! [`RunSummary`] is the single accumulator for one analysis: counters,
//! per-status record lists, the name to build time map, and the raw
//! diagnostic lines. It is append-only; nothing is removed once recorded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::result::{ResultRecord, Status};

/// Counters accumulated while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of result lines recognised
    pub total_tests: u64,
    /// Results with status PASS
    pub passed: u64,
    /// Results with status FAIL
    pub failed: u64,
    /// Results with status TIMEOUT
    pub timeout: u64,
    /// Results with status SKIP
    pub skipped: u64,
    /// Sum of every parsed duration, duplicates under one name included
    #[serde(rename = "total_duration")]
    pub total_duration_secs: u64,
}

impl Stats {
    /// Percentage of results that passed, 0 for an empty run
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total_tests)
    }

    /// Percentage of results that failed, 0 for an empty run
    #[must_use]
    pub fn fail_rate(&self) -> f64 {
        percentage(self.failed, self.total_tests)
    }

    /// True when no result failed or timed out (vacuously true when empty)
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.timeout == 0
    }

    fn record(&mut self, status: Status, duration_secs: u64) {
        self.total_tests += 1;
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Timeout => self.timeout += 1,
            Status::Skip => self.skipped += 1,
        }
        self.total_duration_secs = self.total_duration_secs.saturating_add(duration_secs);
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Records grouped by status, each list in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsByStatus {
    /// PASS records
    pub passed: Vec<ResultRecord>,
    /// FAIL records
    pub failed: Vec<ResultRecord>,
    /// TIMEOUT records
    pub timeout: Vec<ResultRecord>,
    /// SKIP records
    pub skipped: Vec<ResultRecord>,
}

impl ResultsByStatus {
    /// The list holding records of the given status
    #[must_use]
    pub fn get(&self, status: Status) -> &[ResultRecord] {
        match status {
            Status::Pass => &self.passed,
            Status::Fail => &self.failed,
            Status::Timeout => &self.timeout,
            Status::Skip => &self.skipped,
        }
    }

    fn get_mut(&mut self, status: Status) -> &mut Vec<ResultRecord> {
        match status {
            Status::Pass => &mut self.passed,
            Status::Fail => &mut self.failed,
            Status::Timeout => &mut self.timeout,
            Status::Skip => &mut self.skipped,
        }
    }

    /// Total number of records across all statuses
    #[must_use]
    pub fn len(&self) -> usize {
        Status::ALL.iter().map(|s| self.get(*s).len()).sum()
    }

    /// Whether no record has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything extracted from one log
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Counters
    pub stats: Stats,
    /// Records per status
    pub results: ResultsByStatus,
    /// Last duration seen per test name, in first-seen name order
    pub build_times: IndexMap<String, u64>,
    /// Last status seen per test name
    pub latest_status: IndexMap<String, Status>,
    /// Trimmed `[ERROR]` lines in arrival order
    pub errors: Vec<String>,
    /// Trimmed `[WARN]` lines in arrival order
    pub warnings: Vec<String>,
}

impl RunSummary {
    /// Create an empty summary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one extracted result into the summary
    pub fn record(&mut self, record: ResultRecord) {
        self.stats.record(record.status, record.duration_secs);
        // IndexMap::insert keeps the original slot for an existing key
        self.build_times.insert(record.name.clone(), record.duration_secs);
        self.latest_status.insert(record.name.clone(), record.status);
        self.results.get_mut(record.status).push(record);
    }

    /// Store an error line
    pub fn push_error(&mut self, line: impl Into<String>) {
        self.errors.push(line.into());
    }

    /// Store a warning line
    pub fn push_warning(&mut self, line: impl Into<String>) {
        self.warnings.push(line.into());
    }

    /// Status most recently reported for `name`
    #[must_use]
    pub fn status_of(&self, name: &str) -> Option<Status> {
        self.latest_status.get(name).copied()
    }

    /// Build time recorded for `name`, 0 when unknown
    #[must_use]
    pub fn duration_of(&self, name: &str) -> u64 {
        self.build_times.get(name).copied().unwrap_or(0)
    }

    /// Up to `n` tests ordered by build time, slowest first
    ///
    /// Equal durations keep first-seen name order.
    #[must_use]
    pub fn slowest(&self, n: usize) -> Vec<(&str, u64)> {
        let mut times: Vec<(&str, u64)> = self
            .build_times
            .iter()
            .map(|(name, secs)| (name.as_str(), *secs))
            .collect();
        times.sort_by(|a, b| b.1.cmp(&a.1));
        times.truncate(n);
        times
    }

    /// Whether the run passed (no FAIL and no TIMEOUT results)
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.stats.all_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_of(records: &[(&str, Status, u64)]) -> RunSummary {
        let mut summary = RunSummary::new();
        for (name, status, secs) in records {
            summary.record(ResultRecord::new(*name, *status, *secs));
        }
        summary
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::new();
        assert_eq!(summary.stats, Stats::default());
        assert!(summary.results.is_empty());
        assert_eq!(summary.stats.pass_rate(), 0.0);
        assert_eq!(summary.stats.fail_rate(), 0.0);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_record_updates_counters() {
        let summary = summary_of(&[
            ("Rust Build", Status::Pass, 45),
            ("Go Build", Status::Fail, 12),
            ("Deno Check", Status::Skip, 0),
            ("Node Install", Status::Timeout, 300),
        ]);

        assert_eq!(
            summary.stats,
            Stats {
                total_tests: 4,
                passed: 1,
                failed: 1,
                timeout: 1,
                skipped: 1,
                total_duration_secs: 357,
            }
        );
        assert_eq!(summary.results.len(), 4);
        assert_eq!(summary.results.get(Status::Fail)[0].name, "Go Build");
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_duplicate_names_overwrite_build_time_but_not_totals() {
        let summary = summary_of(&[
            ("Flake Check", Status::Fail, 10),
            ("Other", Status::Pass, 1),
            ("Flake Check", Status::Pass, 30),
        ]);

        assert_eq!(summary.stats.total_tests, 3);
        assert_eq!(summary.stats.passed, 2);
        assert_eq!(summary.stats.failed, 1);
        assert_eq!(summary.stats.total_duration_secs, 41);
        assert_eq!(summary.build_times.len(), 2);
        assert_eq!(summary.duration_of("Flake Check"), 30);
        // The name keeps its first-seen position
        assert_eq!(summary.build_times.get_index(0).unwrap().0, "Flake Check");
        assert_eq!(summary.status_of("Flake Check"), Some(Status::Pass));
    }

    #[test]
    fn test_rates() {
        let summary = summary_of(&[
            ("a", Status::Pass, 1),
            ("b", Status::Pass, 1),
            ("c", Status::Fail, 1),
            ("d", Status::Skip, 1),
        ]);
        assert_eq!(summary.stats.pass_rate(), 50.0);
        assert_eq!(summary.stats.fail_rate(), 25.0);
    }

    #[test]
    fn test_slowest_orders_by_duration_then_first_seen() {
        let summary = summary_of(&[
            ("a", Status::Pass, 5),
            ("b", Status::Pass, 50),
            ("c", Status::Pass, 5),
            ("d", Status::Pass, 20),
            ("e", Status::Pass, 1),
            ("f", Status::Pass, 5),
        ]);
        let slowest = summary.slowest(5);
        assert_eq!(
            slowest,
            vec![("b", 50), ("d", 20), ("a", 5), ("c", 5), ("f", 5)]
        );
    }

    #[test]
    fn test_unknown_name_lookups() {
        let summary = RunSummary::new();
        assert_eq!(summary.status_of("missing"), None);
        assert_eq!(summary.duration_of("missing"), 0);
    }

    #[test]
    fn test_stats_serialize_with_total_duration_key() {
        let stats = Stats {
            total_tests: 2,
            passed: 1,
            failed: 1,
            timeout: 0,
            skipped: 0,
            total_duration_secs: 57,
        };
        let json = serde_json::to_value(stats).expect("serialize");
        assert_eq!(json["total_duration"], 57);
        assert!(json.get("total_duration_secs").is_none());
    }
}
