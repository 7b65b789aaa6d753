// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-run test outcomes
//!
//! An [`OutcomeMap`] holds the final pass/fail outcome of every test in one
//! run. Retried tests report several outcomes; the last one in stream order
//! wins. Iteration follows the order in which each test first reported an
//! outcome.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::event::{Event, parse_events};

/// Terminal outcome of a test within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Test passed
    Pass,
    /// Test failed
    Fail,
}

impl Outcome {
    /// Check if this is a failure
    #[must_use]
    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }
}

/// Mapping from test identifier to its last observed outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeMap {
    entries: Vec<(String, Outcome)>,
    index: HashMap<String, usize>,
}

impl OutcomeMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the outcome map of a newline-delimited event log
    #[must_use]
    pub fn from_stream(input: &str) -> Self {
        let mut map = Self::new();
        let mut decoded = 0usize;
        for event in parse_events(input) {
            decoded += 1;
            map.record(&event);
        }
        debug!(events = decoded, tests = map.len(), "built outcome map");
        map
    }

    /// Record an event, overwriting any earlier outcome for the same test
    ///
    /// Events without a test name or without a pass/fail action are ignored.
    /// Returns `true` if the event contributed an outcome.
    pub fn record(&mut self, event: &Event) -> bool {
        let Some((name, outcome)) = event.outcome() else {
            return false;
        };
        self.insert(name, outcome);
        true
    }

    /// Set the outcome of a test
    pub fn insert(&mut self, name: &str, outcome: Outcome) {
        match self.index.get(name).copied() {
            Some(slot) => self.entries[slot].1 = outcome,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), outcome));
            }
        }
    }

    /// Look up the outcome of a test
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Outcome> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Number of tests with an outcome
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no test reported an outcome
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(test, outcome)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), *outcome))
    }

    /// Tests whose final outcome is a failure, in first-seen order
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, outcome)| outcome.is_fail())
            .map(|(name, _)| name)
    }
}

impl Serialize for OutcomeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, outcome) in self.iter() {
            map.serialize_entry(name, &outcome)?;
        }
        map.end()
    }
}
