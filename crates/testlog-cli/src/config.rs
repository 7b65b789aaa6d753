// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command-line configuration for testlog
//!
//! This module defines the subcommands, their positional arguments and the
//! global logging and output options.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// testlog - summarize go test event logs and find regressions between runs
#[derive(Parser, Debug, Clone)]
#[command(name = "testlog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Output format for results
    #[arg(long, value_enum, env = "TESTLOG_FORMAT", default_value_t = OutputFormat::Human, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so that stdout only carries results.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count pass, skip and fail events in a `go test -json` log
    ///
    /// Exits with status 1 when no test passed.
    #[command(alias = "summary")]
    Summarize {
        /// Path to the event log
        log: PathBuf,
    },

    /// List tests that failed in the baseline log but not in the comparison log
    ///
    /// A test that failed in the baseline and never ran in the comparison
    /// counts as a regression.
    #[command(alias = "diff")]
    Compare {
        /// Path to the baseline event log
        baseline: PathBuf,

        /// Path to the comparison event log
        comparison: PathBuf,

        /// Sort the regressions by name instead of baseline order
        #[arg(long)]
        sort: bool,
    },

    /// Tally `--- PASS:` / `--- FAIL:` / `--- SKIP:` lines read from stdin
    ///
    /// Example:
    ///   go test -v ./... | testlog results
    Results,
}

/// How results are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON
    Json,
}

impl Config {
    /// Get the log level based on verbose/quiet flags
    ///
    /// Verbose takes precedence when both are given.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
