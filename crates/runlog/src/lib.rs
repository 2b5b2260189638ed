// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! runlog library
//!
//! This module exports the analyzer's building blocks for use in
//! integration tests and as a library.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod report;

pub use app::{RunOutcome, run};
pub use config::Config;
pub use error::RunError;
