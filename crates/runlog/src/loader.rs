// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test log discovery and loading
//!
//! Logs are named `test-results-<token>.log`, where the token is normally a
//! timestamp, so the lexicographically greatest name is the newest run.

use std::fs;
use std::path::{Path, PathBuf};

use runlog_results::{RunSummary, parse_file};
use tracing::{debug, info};

use crate::error::RunError;

const LOG_PREFIX: &str = "test-results-";
const LOG_SUFFIX: &str = ".log";

/// Whether a file name follows the `test-results-*.log` pattern
#[must_use]
pub fn is_log_file_name(name: &str) -> bool {
    name.len() >= LOG_PREFIX.len() + LOG_SUFFIX.len()
        && name.starts_with(LOG_PREFIX)
        && name.ends_with(LOG_SUFFIX)
}

/// List every log file in `dir`, sorted by file name
///
/// # Errors
///
/// Returns `RunError::DirectoryNotFound` if `dir` is missing or is not a
/// directory. A failure to list the directory is reported as
/// `RunError::Parse`.
pub fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>, RunError> {
    if !dir.is_dir() {
        return Err(RunError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| RunError::Parse {
        path: dir.to_path_buf(),
        source: e.into(),
    })?;

    let mut logs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        // Path::is_file follows symlinks; a linked log is still a candidate
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_log_file_name)
        })
        .collect();
    logs.sort();

    debug!(dir = %dir.display(), count = logs.len(), "Listed test logs");
    Ok(logs)
}

/// Find the newest log in `dir`
///
/// # Errors
///
/// Returns `RunError::DirectoryNotFound` if `dir` does not exist and
/// `RunError::NoLogFiles` if it holds no matching file.
pub fn find_latest_log(dir: &Path) -> Result<PathBuf, RunError> {
    list_log_files(dir)?
        .pop()
        .ok_or_else(|| RunError::NoLogFiles(dir.to_path_buf()))
}

/// Read and parse the log at `path`
///
/// # Errors
///
/// Returns `RunError::Parse` if the file cannot be opened or read.
pub fn load_log(path: &Path) -> Result<RunSummary, RunError> {
    let summary = parse_file(path).map_err(|source| RunError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        results = summary.stats.total_tests,
        "Loaded test log"
    );
    Ok(summary)
}
