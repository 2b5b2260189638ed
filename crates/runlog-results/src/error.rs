// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for runlog-results

use thiserror::Error;

/// Errors that can occur while reading or interpreting a test log
#[derive(Debug, Error)]
pub enum ResultsError {
    /// Error reading the log (also raised for logs that are not valid UTF-8)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A status token outside PASS, FAIL, SKIP and TIMEOUT
    #[error("Unknown test status: {token}")]
    UnknownStatus {
        /// The token that could not be recognised
        token: String,
    },

    /// Invalid result line format
    #[error("Invalid result line format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },
}
