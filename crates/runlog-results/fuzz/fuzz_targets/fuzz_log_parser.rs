// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the log parser
//!
//! Feeds arbitrary text through `LogParser` and checks the counters stay
//! consistent with each other.

#![no_main]

use libfuzzer_sys::fuzz_target;

use runlog_results::{Categories, LogParser, log_lines};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parser = LogParser::new();

        for line in log_lines(input) {
            let _ = parser.process_line(line);
        }

        let summary = parser.finish();
        let stats = summary.stats;
        assert_eq!(
            stats.passed + stats.failed + stats.timeout + stats.skipped,
            stats.total_tests
        );
        assert_eq!(summary.results.len() as u64, stats.total_tests);

        let _ = Categories::from_names(summary.build_times.keys());
    }
});
