// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! runlog-results: Test log extraction and aggregation for runlog
//!
//! This library crate turns the plain-text log written by a test run into a
//! [`RunSummary`]: status counters, per-status result lists, build times per
//! test name, and the error and warning lines seen along the way. It also
//! groups test names into report categories.
//!
//! # Example
//!
//! ```no_run
//! use runlog_results::parser::{LogParser, parse_file};
//!
//! // Parse a complete log file
//! let summary = parse_file("test-results/test-results-20250101.log").unwrap();
//!
//! // Or feed lines incrementally
//! let mut parser = LogParser::new();
//! parser.process_line("[RESULT] Rust Build: PASS (45s)");
//! let summary = parser.finish();
//! ```

pub mod category;
pub mod error;
pub mod parser;
pub mod result;
pub mod summary;

pub use category::{Categories, Category, categorize};
pub use error::ResultsError;
pub use parser::{
    LineKind, LogParser, classify_line, log_lines, parse_file, parse_log, parse_reader,
};
pub use result::{ResultRecord, Status};
pub use summary::{ResultsByStatus, RunSummary, Stats};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::category::{Categories, Category};
    pub use crate::error::ResultsError;
    pub use crate::parser::{LogParser, parse_file, parse_log};
    pub use crate::result::{ResultRecord, Status};
    pub use crate::summary::RunSummary;
}
