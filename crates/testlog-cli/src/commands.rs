// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Subcommand execution
//!
//! Each command reads its input, calls into `testlog-core` and renders the
//! result. Commands return the process exit status rather than exiting, so
//! they can be driven from tests with in-memory readers and writers.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use testlog_core::{Regressions, TestlogError, read_plain_results, summarize};

use crate::config::{Command, Config, OutputFormat};
use crate::report;

/// Errors that abort a command
#[derive(Debug, Error)]
pub enum CliError {
    /// An input log could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The log path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Writing results failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing results failed
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Processing the input failed
    #[error(transparent)]
    Testlog(#[from] TestlogError),
}

/// Read a whole log into memory
///
/// Invalid UTF-8 is replaced rather than rejected: logs often carry raw
/// build output, and such lines never decode as events anyway.
///
/// # Errors
///
/// Returns `CliError::Read` if the file cannot be read.
pub fn read_log(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read log");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run the configured command
///
/// `stdin` is only consumed by `results`. Returns the process exit status.
///
/// # Errors
///
/// Returns an error if an input cannot be read, output cannot be written,
/// or plain-text results report a test twice.
pub fn run<R: BufRead, W: Write>(config: &Config, stdin: R, out: &mut W) -> Result<u8, CliError> {
    match &config.command {
        Command::Summarize { log } => run_summarize(log, config.format, out),
        Command::Compare {
            baseline,
            comparison,
            sort,
        } => run_compare(baseline, comparison, *sort, config.format, out),
        Command::Results => run_results(stdin, config.format, out),
    }
}

/// Summarize one log; exit status is 1 when nothing passed
///
/// # Errors
///
/// Returns an error if the log cannot be read or output cannot be written.
pub fn run_summarize<W: Write>(
    log: &Path,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8, CliError> {
    let summary = summarize(&read_log(log)?);
    report::write_summary(out, &summary, format)?;

    if summary.is_broken() {
        warn!(path = %log.display(), "no tests passed");
    } else {
        info!(
            path = %log.display(),
            pass = summary.pass,
            skip = summary.skip,
            fail = summary.fail,
            "summarized"
        );
    }
    Ok(summary.exit_code())
}

/// Compare two logs and list the regressions
///
/// # Errors
///
/// Returns an error if either log cannot be read or output cannot be written.
pub fn run_compare<W: Write>(
    baseline: &Path,
    comparison: &Path,
    sort: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8, CliError> {
    let baseline_log = read_log(baseline)?;
    let comparison_log = read_log(comparison)?;

    let mut regressions = Regressions::from_streams(&baseline_log, &comparison_log);
    if sort {
        regressions = regressions.into_sorted();
    }
    report::write_regressions(out, baseline, comparison, &regressions, format)?;

    info!(
        baseline = %baseline.display(),
        comparison = %comparison.display(),
        regressions = regressions.len(),
        "compared runs"
    );
    Ok(0)
}

/// Tally plain-text results from `input`
///
/// # Errors
///
/// Returns an error if reading fails, a test is reported twice, or output
/// cannot be written.
pub fn run_results<R: BufRead, W: Write>(
    input: R,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8, CliError> {
    let results = read_plain_results(input)?;
    report::write_plain_results(out, &results, format)?;
    info!(total = results.total(), "tallied results");
    Ok(0)
}
