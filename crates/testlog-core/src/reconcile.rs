// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Regression detection between two test runs
//!
//! A regression is a test whose final outcome in the baseline run is a
//! failure and which did not fail in the comparison run, either because it
//! passed or because it never reported an outcome there.
//!
//! # Example
//!
//! ```
//! use testlog_core::reconcile;
//!
//! let a = "{\"Test\":\"T1\",\"Action\":\"fail\"}\n{\"Test\":\"T2\",\"Action\":\"pass\"}";
//! let b = "{\"Test\":\"T1\",\"Action\":\"pass\"}\n{\"Test\":\"T2\",\"Action\":\"fail\"}";
//! assert_eq!(reconcile(a, b), vec!["T1".to_string()]);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::outcome::OutcomeMap;

/// Tests that failed in the baseline run but not in the comparison run
///
/// Tests appear in the order they first reported an outcome in the baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Regressions {
    tests: Vec<String>,
}

impl Regressions {
    /// Compare two outcome maps
    #[must_use]
    pub fn from_maps(baseline: &OutcomeMap, comparison: &OutcomeMap) -> Self {
        let tests = baseline
            .failures()
            .filter(|name| !comparison.get(name).is_some_and(|o| o.is_fail()))
            .map(str::to_string)
            .collect();
        Self { tests }
    }

    /// Compare two newline-delimited event logs
    #[must_use]
    pub fn from_streams(baseline: &str, comparison: &str) -> Self {
        let baseline = OutcomeMap::from_stream(baseline);
        let comparison = OutcomeMap::from_stream(comparison);
        let regressions = Self::from_maps(&baseline, &comparison);
        debug!(
            baseline_failures = baseline.failures().count(),
            regressions = regressions.len(),
            "reconciled runs"
        );
        regressions
    }

    /// Sort the tests lexicographically
    #[must_use]
    pub fn into_sorted(mut self) -> Self {
        self.tests.sort_unstable();
        self
    }

    /// Number of regressions
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if there are no regressions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The regressed test identifiers
    #[must_use]
    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Consume into the list of test identifiers
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tests
    }
}

/// Find the tests that failed in `baseline` but did not fail in `comparison`
///
/// Neither input can cause an error: undecodable lines are skipped, and an
/// empty or eventless input simply contributes no outcomes.
#[must_use]
pub fn reconcile(baseline: &str, comparison: &str) -> Vec<String> {
    Regressions::from_streams(baseline, comparison).into_vec()
}

/// Compare two pre-built outcome maps
#[must_use]
pub fn reconcile_maps(baseline: &OutcomeMap, comparison: &OutcomeMap) -> Vec<String> {
    Regressions::from_maps(baseline, comparison).into_vec()
}
