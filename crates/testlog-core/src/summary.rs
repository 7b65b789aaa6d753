// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Pass/skip/fail counting over an event log

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{Action, Event, parse_events};

/// Counts of terminal actions in a log
///
/// Every decoded event is counted, including package-level events, so the
/// numbers are event counts rather than distinct tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Events with action `pass`
    pub pass: usize,
    /// Events with action `skip`
    pub skip: usize,
    /// Events with action `fail`
    pub fail: usize,
}

impl Summary {
    /// Count one event
    pub fn record(&mut self, event: &Event) {
        match event.action {
            Some(Action::Pass) => self.pass += 1,
            Some(Action::Skip) => self.skip += 1,
            Some(Action::Fail) => self.fail += 1,
            Some(Action::Other(_)) | None => {}
        }
    }

    /// Total counted events
    #[must_use]
    pub fn total(&self) -> usize {
        self.pass + self.skip + self.fail
    }

    /// A run with nothing passing is treated as broken
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.pass == 0
    }

    /// Process exit code for this summary: `1` when broken, else `0`
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(self.is_broken())
    }
}

/// Count `pass`, `skip` and `fail` events in a newline-delimited log
#[must_use]
pub fn summarize(input: &str) -> Summary {
    let mut summary = Summary::default();
    for event in parse_events(input) {
        summary.record(&event);
    }
    debug!(
        pass = summary.pass,
        skip = summary.skip,
        fail = summary.fail,
        "summarized log"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_summarize_one_of_each() {
        let log = r#"{"Test":"A","Action":"pass"}
{"Test":"B","Action":"fail"}
{"Test":"C","Action":"skip"}"#;
        let summary = summarize(log);
        assert_eq!(
            summary,
            Summary {
                pass: 1,
                skip: 1,
                fail: 1
            }
        );
        assert!(!summary.is_broken());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_summarize_counts_package_events() {
        let log = r#"{"Action":"pass","Package":"p"}
{"Test":"A","Action":"pass","Package":"p"}"#;
        assert_eq!(summarize(log).pass, 2);
    }

    #[test]
    fn test_summarize_counts_action_despite_odd_fields() {
        let summary = summarize(r#"{"Test":7,"Action":"pass","Package":{"name":"p"}}"#);
        assert_eq!(summary.pass, 1);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_summarize_ignores_other_actions() {
        let log = r#"{"Test":"A","Action":"run"}
{"Test":"A","Action":"output","Output":"=== RUN A\n"}
{"Test":"A","Action":"PASS"}
{"Test":"A"}
not json"#;
        let summary = summarize(log);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_zero_pass_is_broken() {
        let summary = summarize(r#"{"Test":"A","Action":"fail"}"#);
        assert!(summary.is_broken());
        assert_eq!(summary.exit_code(), 1);

        assert_eq!(summarize("").exit_code(), 1);
    }
}
