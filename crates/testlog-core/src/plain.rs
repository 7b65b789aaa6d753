// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-text test output tallying
//!
//! Verbose `go test -v` output reports results as `--- PASS: TestName (0.01s)`.
//! This module tallies those lines without requiring JSON output. Each test
//! may report exactly once; a repeated name is an error.
//!
//! # Example
//!
//! ```
//! use testlog_core::plain::{PlainStatus, parse_plain_results};
//!
//! let output = "=== RUN   TestA\n--- PASS: TestA (0.00s)\n--- SKIP: TestB (0.00s)\n";
//! let results = parse_plain_results(output).unwrap();
//! assert_eq!(results.total(), 2);
//! assert_eq!(results.count(PlainStatus::Pass), 1);
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::TestlogError;

/// Status word reported by plain-text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlainStatus {
    /// `PASS:`
    Pass,
    /// `FAIL:`
    Fail,
    /// `SKIP:`
    Skip,
}

impl PlainStatus {
    const MARKERS: [(&'static str, Self); 3] = [
        ("PASS:", Self::Pass),
        ("FAIL:", Self::Fail),
        ("SKIP:", Self::Skip),
    ];

    fn from_marker(word: &str) -> Option<Self> {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| *marker == word)
            .map(|(_, status)| *status)
    }

    /// The status word without its colon
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }
}

impl fmt::Display for PlainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single test result from plain-text output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainResult {
    /// Test name
    pub name: String,
    /// Reported status
    pub status: PlainStatus,
}

/// Tallied plain-text results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlainResults {
    /// Results in the order they were reported
    pub results: Vec<PlainResult>,
    /// Number of results per status
    pub counts: BTreeMap<PlainStatus, usize>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl PlainResults {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of output
    ///
    /// Returns the result the line reported, if any.
    ///
    /// # Errors
    ///
    /// Returns `TestlogError::DuplicateTest` if the line reports a test that
    /// was already recorded.
    pub fn process_line(&mut self, line: &str) -> Result<Option<&PlainResult>, TestlogError> {
        if !Self::has_marker(line) {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(status) = words.by_ref().find_map(PlainStatus::from_marker) else {
            return Ok(None);
        };
        let Some(name) = words.next() else {
            return Ok(None);
        };

        if !self.seen.insert(name.to_string()) {
            return Err(TestlogError::DuplicateTest {
                name: name.to_string(),
            });
        }

        *self.counts.entry(status).or_insert(0) += 1;
        self.results.push(PlainResult {
            name: name.to_string(),
            status,
        });
        Ok(self.results.last())
    }

    fn has_marker(line: &str) -> bool {
        PlainStatus::MARKERS
            .iter()
            .any(|(marker, _)| line.contains(marker))
    }

    /// Total number of recorded tests
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of tests with the given status
    #[must_use]
    pub fn count(&self, status: PlainStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}

/// Tally plain-text results from an in-memory string
///
/// # Errors
///
/// Returns `TestlogError::DuplicateTest` if any test is reported twice.
pub fn parse_plain_results(output: &str) -> Result<PlainResults, TestlogError> {
    let mut results = PlainResults::new();
    for line in output.lines() {
        results.process_line(line)?;
    }
    Ok(results)
}

/// Tally plain-text results from a reader, line by line
///
/// Invalid UTF-8 is replaced rather than rejected, so stray bytes in build
/// output cannot stop the tally.
///
/// # Errors
///
/// Returns `TestlogError::Io` if reading fails, or
/// `TestlogError::DuplicateTest` if any test is reported twice.
pub fn read_plain_results<R: BufRead>(mut reader: R) -> Result<PlainResults, TestlogError> {
    let mut results = PlainResults::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        results.process_line(&String::from_utf8_lossy(&buf))?;
    }
    Ok(results)
}
