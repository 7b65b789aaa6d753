// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testlog: post-process `go test` logs
//!
//! Summarizes pass/skip/fail counts of a `go test -json` log, lists the tests
//! that regressed between two runs, or tallies verbose plain-text output.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use testlog_cli::commands;
use testlog_cli::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    // Missing or invalid arguments exit with status 2 here
    let config = Config::parse();
    testlog_cli::init_logging(config.log_level());
    debug!(?config, "starting testlog");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let status = commands::run(&config, stdin, &mut stdout)?;
    Ok(ExitCode::from(status))
}
