// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for a full analysis run
//!
//! This module tests:
//! - Log discovery (newest file wins, missing directory, empty directory)
//! - Report and JSON files written next to the logs
//! - Exit status driven by FAIL/TIMEOUT results only
//! - Output write failures staying non-fatal
//! - A failing console still leaving both output files behind


use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

use runlog::config::Config;
use runlog::export::ExportDocument;
use runlog::{RunError, run};
use test_utils::{TempTestDir, fixture_log, log_dir_with};

fn run_captured(config: &Config) -> (Result<runlog::RunOutcome, RunError>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

/// Console that refuses every write, like stdout with its reader gone
struct ClosedConsole;

impl Write for ClosedConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

fn runlog_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_runlog"))
}

// ============================================================================
// In-process runs
// ============================================================================

#[test]
fn test_run_picks_newest_log() {
    let temp = TempTestDir::new("newest");
    let dir = log_dir_with(
        &temp,
        &[
            ("test-results-20250101-120000.log", fixture_log("failing-run.log").as_str()),
            ("test-results-20250102-090000.log", fixture_log("passing-run.log").as_str()),
            ("notes.log", "[RESULT] Ignored: FAIL (1s)"),
        ],
    );

    let (result, output) = run_captured(&Config::with_dir(&dir));
    let outcome = result.expect("run should succeed");

    assert_eq!(
        outcome.log_file,
        dir.join("test-results-20250102-090000.log")
    );
    assert!(output.starts_with(&format!(
        "📂 Analyzing log: {}\n\n",
        outcome.log_file.display()
    )));
    assert!(outcome.passed());
    assert_eq!(outcome.summary.stats.total_tests, 5);
    assert_eq!(outcome.summary.stats.skipped, 1);
}

#[test]
fn test_run_writes_report_and_json() {
    let temp = TempTestDir::new("outputs");
    let dir = log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("failing-run.log").as_str())],
    );

    let (result, output) = run_captured(&Config::with_dir(&dir));
    let outcome = result.expect("run should succeed");

    assert!(outcome.report_saved);
    assert!(outcome.json_exported);
    assert!(!outcome.passed());

    let saved = temp.read_file("test-results/analysis-report.txt");
    assert_eq!(saved, outcome.report);
    assert!(saved.contains("✗ OVERALL STATUS: FAIL"));
    assert!(output.contains(&format!(
        "💾 Report saved to: {}",
        dir.join("analysis-report.txt").display()
    )));
    assert!(output.contains("✓ JSON results exported to:"));

    let doc = ExportDocument::from_json(&temp.read_file("test-results/results.json"))
        .expect("valid export");
    assert_eq!(doc.stats, outcome.summary.stats);
    assert_eq!(doc.stats.total_tests, 13);
    assert_eq!(doc.stats.total_duration_secs, 789);
    assert_eq!(doc.build_times.len(), 12);
    assert_eq!(doc.build_times.get("Flake Check"), Some(&7));
    assert_eq!(doc.results_by_status.timeout[0].name, "npm test");
    assert_eq!(doc.errors.len(), 1);
    assert_eq!(doc.warnings.len(), 1);
}

#[test]
fn test_run_missing_directory() {
    let temp = TempTestDir::new("missing_dir");
    let config = Config::with_dir(temp.path().join("test-results"));

    let (result, output) = run_captured(&config);
    let err = result.expect_err("run should fail");
    assert!(matches!(err, RunError::DirectoryNotFound(_)));
    assert!(err.is_discovery());
    assert!(output.is_empty());
}

#[test]
fn test_run_directory_without_logs() {
    let temp = TempTestDir::new("no_logs");
    let dir = log_dir_with(&temp, &[("results.json", "{}"), ("test-results.log", "")]);

    let (result, _) = run_captured(&Config::with_dir(&dir));
    assert!(matches!(result, Err(RunError::NoLogFiles(_))));
}

#[test]
fn test_run_unreadable_log_is_parse_error() {
    let temp = TempTestDir::new("bad_utf8");
    let dir = temp.create_subdir("test-results");
    std::fs::write(dir.join("test-results-1.log"), b"[RESULT] x: PASS (1s)\n\xff\n")
        .expect("write log");

    let (result, output) = run_captured(&Config::with_dir(&dir));
    assert!(matches!(result, Err(RunError::Parse { .. })));
    assert!(!temp.file_exists("test-results/analysis-report.txt"));
    assert!(!output.contains("OVERALL STATUS"));
}

#[test]
fn test_run_output_write_failures_are_not_fatal() {
    let temp = TempTestDir::new("write_fail");
    let dir = log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("passing-run.log").as_str())],
    );
    let config = Config {
        report: Some(temp.path().join("missing/analysis-report.txt")),
        json: Some(temp.path().join("missing/results.json")),
        ..Config::with_dir(&dir)
    };

    let (result, output) = run_captured(&config);
    let outcome = result.expect("run should still succeed");

    assert!(!outcome.report_saved);
    assert!(!outcome.json_exported);
    assert!(outcome.passed());
    assert!(output.contains("⚠️  Could not save report:"));
    assert!(output.contains("✗ Could not export JSON:"));
}

#[test]
fn test_run_console_failure_still_writes_files() {
    let temp = TempTestDir::new("closed_console");
    let dir = log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("passing-run.log").as_str())],
    );

    let result = run(&Config::with_dir(&dir), &mut ClosedConsole);

    assert!(matches!(result, Err(RunError::Output(_))));
    assert!(temp.file_exists("test-results/analysis-report.txt"));
    assert!(temp.file_exists("test-results/results.json"));
    assert!(
        temp.read_file("test-results/analysis-report.txt")
            .contains("✓ OVERALL STATUS: PASS")
    );
}

#[cfg(unix)]
#[test]
fn test_run_follows_symlinked_log() {
    let temp = TempTestDir::new("symlinked_log");
    let dir = log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("failing-run.log").as_str())],
    );
    let target = temp.create_file("archive/run.log", &fixture_log("passing-run.log"));
    let link = dir.join("test-results-2.log");
    std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");

    assert_eq!(
        runlog::loader::find_latest_log(&dir).expect("log should be found"),
        link
    );

    let (result, _) = run_captured(&Config::with_dir(&dir));
    let outcome = result.expect("run should succeed");
    assert_eq!(outcome.log_file, link);
    assert!(outcome.passed());
}

#[test]
fn test_run_explicit_log_file() {
    let temp = TempTestDir::new("explicit_log");
    let log = temp.create_file("custom.log", "[RESULT] Go Build: FAIL (12s)\n");
    let config = Config {
        log: Some(log.clone()),
        ..Config::with_dir(temp.path())
    };

    let (result, _) = run_captured(&config);
    let outcome = result.expect("run should succeed");
    assert_eq!(outcome.log_file, log);
    assert_eq!(outcome.summary.stats.failed, 1);
    assert!(temp.file_exists("analysis-report.txt"));
    assert!(temp.file_exists("results.json"));
}

#[test]
fn test_run_empty_log_passes() {
    let temp = TempTestDir::new("empty_log");
    let dir = log_dir_with(&temp, &[("test-results-1.log", "")]);

    let (result, _) = run_captured(&Config::with_dir(&dir));
    let outcome = result.expect("run should succeed");
    assert!(outcome.passed());
    assert!(outcome.report.contains("  ✓ Passed:        0 (0.0%)"));
}

// ============================================================================
// Binary runs
// ============================================================================

#[test]
fn test_binary_exit_code_on_failures() {
    let temp = TempTestDir::new("bin_fail");
    log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("failing-run.log").as_str())],
    );

    let output = runlog_bin()
        .current_dir(temp.path())
        .env_remove("RUNLOG_DIR")
        .env_remove("RUNLOG_LOG")
        .output()
        .expect("Failed to run runlog");

    assert_eq!(output.status.code(), Some(1));
    assert!(temp.file_exists("test-results/analysis-report.txt"));
    assert!(temp.file_exists("test-results/results.json"));
}

#[test]
fn test_binary_exit_code_on_success() {
    let temp = TempTestDir::new("bin_pass");
    log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("passing-run.log").as_str())],
    );

    let output = runlog_bin()
        .current_dir(temp.path())
        .env_remove("RUNLOG_DIR")
        .env_remove("RUNLOG_LOG")
        .output()
        .expect("Failed to run runlog");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ OVERALL STATUS: PASS"));
}

#[test]
fn test_binary_missing_directory() {
    let temp = TempTestDir::new("bin_missing");

    let output = runlog_bin()
        .current_dir(temp.path())
        .env_remove("RUNLOG_DIR")
        .env_remove("RUNLOG_LOG")
        .output()
        .expect("Failed to run runlog");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ test-results directory not found"));
    assert!(stdout.contains("Run: ./test-migration.sh first"));
}

#[test]
fn test_binary_no_log_files() {
    let temp = TempTestDir::new("bin_empty");
    let dir: PathBuf = temp.create_subdir("test-results");

    let output = runlog_bin()
        .arg("--dir")
        .arg(&dir)
        .env_remove("RUNLOG_LOG")
        .output()
        .expect("Failed to run runlog");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ No test log files found"));
}

#[cfg(unix)]
#[test]
fn test_binary_closed_stdout_still_writes_files() {
    let temp = TempTestDir::new("bin_closed_stdout");
    log_dir_with(
        &temp,
        &[("test-results-1.log", fixture_log("passing-run.log").as_str())],
    );

    let (reader, writer) = io::pipe().expect("Failed to create pipe");
    drop(reader);

    let status = runlog_bin()
        .current_dir(temp.path())
        .env_remove("RUNLOG_DIR")
        .env_remove("RUNLOG_LOG")
        .stdout(writer)
        .status()
        .expect("Failed to run runlog");

    assert_eq!(status.code(), Some(1));
    assert!(temp.file_exists("test-results/analysis-report.txt"));
    assert!(temp.file_exists("test-results/results.json"));
}
