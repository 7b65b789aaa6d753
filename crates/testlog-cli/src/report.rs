// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Result rendering
//!
//! Each writer renders one command's result either as plain text for a
//! terminal or as a single JSON document.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use testlog_core::{PlainResults, Regressions, Summary};

use crate::commands::CliError;
use crate::config::OutputFormat;

/// JSON document for `compare`
#[derive(Debug, Serialize)]
struct RegressionReport<'a> {
    baseline: &'a Path,
    comparison: &'a Path,
    regressions: &'a Regressions,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write pass/skip/fail counts
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Human => {
            writeln!(out, "Pass: {}", summary.pass)?;
            writeln!(out, "Skip: {}", summary.skip)?;
            writeln!(out, "Fail: {}", summary.fail)?;
            Ok(())
        }
    }
}

/// Write the tests that regressed between two logs
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_regressions<W: Write>(
    out: &mut W,
    baseline: &Path,
    comparison: &Path,
    regressions: &Regressions,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &RegressionReport {
                baseline,
                comparison,
                regressions,
            },
        ),
        OutputFormat::Human => {
            writeln!(
                out,
                "Tests failed in {} that didn't fail in {}:",
                baseline.display(),
                comparison.display()
            )?;
            if regressions.is_empty() {
                writeln!(out, "  (none)")?;
            }
            for test in regressions.tests() {
                writeln!(out, "  {test}")?;
            }
            Ok(())
        }
    }
}

/// Write per-test plain-text results and totals
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_plain_results<W: Write>(
    out: &mut W,
    results: &PlainResults,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, results),
        OutputFormat::Human => {
            for result in &results.results {
                writeln!(out, "Test {}: {}", result.name, result.status)?;
            }
            writeln!(out, "Total tests: {}", results.total())?;
            for (status, count) in &results.counts {
                writeln!(out, "Total {status} tests: {count}")?;
            }
            Ok(())
        }
    }
}
