// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Text report rendering
//!
//! [`render_report`] is a pure function of the summary and the
//! [`ReportHeader`]: rendering the same state twice gives identical text.
//! The only time-dependent content is the generation timestamp, which the
//! caller supplies.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use runlog_results::{Categories, RunSummary, Status};
use tracing::info;

use crate::error::RunError;

/// Maximum number of error or warning lines shown in the report
pub const DIAGNOSTIC_LIMIT: usize = 10;
/// Number of entries in the slowest tests list
pub const SLOWEST_COUNT: usize = 5;

const RULE_WIDTH: usize = 60;
const CATEGORY_RULE_WIDTH: usize = 40;

const BANNER: [&str; 3] = [
    "╔════════════════════════════════════════════════════════════════╗",
    "║   Migration Test Results - Comprehensive Analysis Report       ║",
    "╚════════════════════════════════════════════════════════════════╝",
];

/// Context printed at the top of the report
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    /// When the report was generated
    pub generated_at: NaiveDateTime,
    /// Log file the report was built from
    pub log_file: &'a Path,
}

/// Render the full analysis report
///
/// Lines are joined with `\n`; there is no trailing newline.
#[must_use]
pub fn render_report(summary: &RunSummary, header: &ReportHeader<'_>) -> String {
    let categories = Categories::from_names(summary.build_times.keys());
    let mut lines: Vec<String> = Vec::new();

    lines.extend(BANNER.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.push(format!(
        "Report generated: {}",
        header.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Log file: {}", header.log_file.display()));
    lines.push(String::new());

    summary_section(&mut lines, summary);
    category_section(&mut lines, summary, &categories);
    performance_section(&mut lines, summary, &categories);
    diagnostic_section(&mut lines, "❌ ERRORS", "errors", &summary.errors);
    diagnostic_section(&mut lines, "⚠️  WARNINGS", "warnings", &summary.warnings);
    recommendation_section(&mut lines, summary.all_passed());
    verdict_section(&mut lines, summary.all_passed());

    lines.join("\n")
}

fn rule(width: usize, ch: char) -> String {
    std::iter::repeat_n(ch, width).collect()
}

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push(rule(RULE_WIDTH, '='));
}

fn summary_section(lines: &mut Vec<String>, summary: &RunSummary) {
    let stats = &summary.stats;
    heading(lines, "📊 SUMMARY STATISTICS");
    lines.push(format!("  Total Tests:     {}", stats.total_tests));
    lines.push(format!(
        "  ✓ Passed:        {} ({:.1}%)",
        stats.passed,
        stats.pass_rate()
    ));
    lines.push(format!(
        "  ✗ Failed:        {} ({:.1}%)",
        stats.failed,
        stats.fail_rate()
    ));
    lines.push(format!("  ⏱ Timeout:       {}", stats.timeout));
    lines.push(format!("  ⊘ Skipped:       {}", stats.skipped));
    lines.push(format!(
        "  ⏱ Total Duration: {}s (~{}m)",
        stats.total_duration_secs,
        stats.total_duration_secs / 60
    ));
    lines.push(String::new());
}

fn category_section(lines: &mut Vec<String>, summary: &RunSummary, categories: &Categories) {
    heading(lines, "📋 RESULTS BY CATEGORY");

    for (category, names) in categories.iter() {
        lines.push(format!("\n{category}:"));
        lines.push(rule(CATEGORY_RULE_WIDTH, '-'));

        for name in names {
            let status = summary.status_of(name);
            let (icon, label) = status.map_or(("?", "UNKNOWN"), |s| (s.icon(), s.as_str()));
            lines.push(format!(
                "  {icon} {name:<45} {label:<8} ({}s)",
                summary.duration_of(name)
            ));
        }
    }
}

fn performance_section(lines: &mut Vec<String>, summary: &RunSummary, categories: &Categories) {
    lines.push("\n".to_string());
    heading(lines, "⚡ PERFORMANCE ANALYSIS");

    lines.push("\nSlowest 5 Tests:".to_string());
    for (name, secs) in summary.slowest(SLOWEST_COUNT) {
        lines.push(format!("  {secs:>4}s  {name}"));
    }

    lines.push("\nAverage Times by Category:".to_string());
    for (category, names) in categories.iter() {
        let total: u64 = names.iter().map(|n| summary.duration_of(n)).sum();
        let average = if names.is_empty() {
            0.0
        } else {
            total as f64 / names.len() as f64
        };
        lines.push(format!(
            "  {category:<15}  {average:>6.1}s avg ({total}s total)"
        ));
    }
}

fn diagnostic_section(lines: &mut Vec<String>, title: &str, noun: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }

    lines.push("\n".to_string());
    heading(lines, title);
    lines.extend(entries.iter().take(DIAGNOSTIC_LIMIT).cloned());
    if entries.len() > DIAGNOSTIC_LIMIT {
        lines.push(format!(
            "... and {} more {noun}",
            entries.len() - DIAGNOSTIC_LIMIT
        ));
    }
}

fn recommendation_section(lines: &mut Vec<String>, all_passed: bool) {
    lines.push("\n".to_string());
    heading(lines, "📝 RECOMMENDATIONS");

    let advice: &[&str] = if all_passed {
        &[
            "✅ All tests passed! Migration is successful.",
            "   Next steps:",
            "   1. Review the detailed test log for any warnings",
            "   2. Commit migration with confidence",
            "   3. Update CLAUDE.md to reference new lib/packaging",
        ]
    } else {
        &[
            "❌ Some tests failed or timed out.",
            "   Next steps:",
            "   1. Review failed tests in detailed log",
            "   2. Identify patterns (language-specific? platform-specific?)",
            "   3. Fix critical issues first",
            "   4. Re-run test suite",
        ]
    };
    lines.extend(advice.iter().map(|s| s.to_string()));
}

fn verdict_section(lines: &mut Vec<String>, all_passed: bool) {
    lines.push(String::new());
    lines.push(rule(RULE_WIDTH, '='));
    lines.push(if all_passed {
        format!("{} OVERALL STATUS: PASS", Status::Pass.icon())
    } else {
        format!("{} OVERALL STATUS: FAIL", Status::Fail.icon())
    });
    lines.push(rule(RULE_WIDTH, '='));
}

/// Write the rendered report to `path`
///
/// # Errors
///
/// Returns `RunError::Write` if the file cannot be written.
pub fn save_report(text: &str, path: &Path) -> Result<(), RunError> {
    fs::write(path, text).map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Report written");
    Ok(())
}
