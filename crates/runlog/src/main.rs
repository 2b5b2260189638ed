// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! runlog: analysis report for migration test logs
//!
//! Reads the newest `test-results/test-results-*.log`, prints a report,
//! saves it with a JSON export, and exits non-zero if any test failed or
//! timed out.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use runlog::{Config, RunError, run};

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    // stdout carries the report, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn try_main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();
    init_tracing(&config)?;

    let outcome = run(&config, &mut io::stdout().lock())?;
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            // stdout may be the thing that failed; never panic writing to it
            let mut stdout = io::stdout();
            let _ = writeln!(stdout, "❌ {err}");
            if let Some(RunError::DirectoryNotFound(_)) = err.downcast_ref::<RunError>() {
                let _ = writeln!(stdout, "   Run: ./test-migration.sh first");
            }
            ExitCode::FAILURE
        }
    }
}
