// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for testlog-core
//!
//! These tests use proptest to check the reconciler and summarizer against
//! arbitrary event logs, including logs interleaved with non-event noise.

use proptest::prelude::*;
use testlog_core::{Outcome, OutcomeMap, reconcile, summarize};

// ============================================================================
// Strategies
// ============================================================================

/// A small pool of test names so that runs overlap and tests repeat
fn test_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TestA".to_string()),
        Just("TestB".to_string()),
        Just("TestC".to_string()),
        Just("TestD/sub".to_string()),
        Just("".to_string()),
        "Test[a-z]{1,3}".prop_map(|s| s),
    ]
}

fn action() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pass".to_string()),
        Just("fail".to_string()),
        Just("skip".to_string()),
        Just("run".to_string()),
        Just("output".to_string()),
        Just("FAIL".to_string()),
    ]
}

/// A single well-formed event line
fn event_line() -> impl Strategy<Value = String> {
    (test_name(), action()).prop_map(|(test, action)| {
        serde_json::json!({ "Test": test, "Action": action }).to_string()
    })
}

/// A line that never decodes as an event
fn noise_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("FAIL\tgithub.com/x/y\t0.5s".to_string()),
        Just("{\"Test\":".to_string()),
        Just("[1,2,3]".to_string()),
        Just("null".to_string()),
        "[a-z =:-]{0,30}".prop_map(|s| s),
    ]
}

fn event_log() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(event_line(), 0..40)
}

/// Interleave noise lines into an event log at arbitrary positions
fn with_noise() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec((event_line(), prop::option::of(noise_line())), 0..40).prop_map(
        |pairs| {
            let clean: Vec<String> = pairs.iter().map(|(e, _)| e.clone()).collect();
            let mut noisy = Vec::new();
            for (event, noise) in pairs {
                if let Some(noise) = noise {
                    noisy.push(noise);
                }
                noisy.push(event);
            }
            (clean, noisy)
        },
    )
}

// ============================================================================
// Property Tests: Reconciler
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every regression failed in the baseline
    #[test]
    fn regressions_are_baseline_failures(a in event_log(), b in event_log()) {
        let a = a.join("\n");
        let b = b.join("\n");
        let baseline = OutcomeMap::from_stream(&a);
        for test in reconcile(&a, &b) {
            prop_assert_eq!(baseline.get(&test), Some(Outcome::Fail));
        }
    }

    /// Property: no regression failed in the comparison run
    #[test]
    fn regressions_did_not_fail_in_comparison(a in event_log(), b in event_log()) {
        let a = a.join("\n");
        let b = b.join("\n");
        let comparison = OutcomeMap::from_stream(&b);
        for test in reconcile(&a, &b) {
            prop_assert_ne!(comparison.get(&test), Some(Outcome::Fail));
        }
    }

    /// Property: a run compared with itself has no regressions
    #[test]
    fn self_comparison_is_empty(a in event_log()) {
        let a = a.join("\n");
        prop_assert!(reconcile(&a, &a).is_empty());
    }

    /// Property: comparing with an empty run yields every baseline failure
    #[test]
    fn empty_comparison_yields_all_failures(a in event_log()) {
        let a = a.join("\n");
        let expected: Vec<String> = OutcomeMap::from_stream(&a)
            .failures()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(reconcile(&a, ""), expected);
    }

    /// Property: regressions contain no duplicates
    #[test]
    fn regressions_are_unique(a in event_log(), b in event_log()) {
        let a = a.join("\n");
        let b = b.join("\n");
        let result = reconcile(&a, &b);
        let unique: std::collections::HashSet<_> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    /// Property: noise lines do not change the result
    #[test]
    fn noise_does_not_change_regressions(
        (a_clean, a_noisy) in with_noise(),
        (b_clean, b_noisy) in with_noise(),
    ) {
        prop_assert_eq!(
            reconcile(&a_noisy.join("\n"), &b_noisy.join("\n")),
            reconcile(&a_clean.join("\n"), &b_clean.join("\n"))
        );
    }

    /// Property: a trailing pass after a failure hides the failure
    #[test]
    fn last_write_wins(a in event_log(), name in "Test[A-Z]{4}") {
        let mut lines = a;
        lines.push(serde_json::json!({ "Test": name, "Action": "fail" }).to_string());
        lines.push(serde_json::json!({ "Test": name, "Action": "pass" }).to_string());
        let result = reconcile(&lines.join("\n"), "");
        prop_assert!(!result.contains(&name));
    }

    /// Property: arbitrary text never panics
    #[test]
    fn arbitrary_text_never_panics(a in ".*", b in ".*") {
        let _ = reconcile(&a, &b);
        let _ = summarize(&a);
    }
}

// ============================================================================
// Property Tests: Summarizer
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: counts match the number of exact terminal actions
    #[test]
    fn summary_counts_terminal_actions(lines in event_log()) {
        let count = |wanted: &str| {
            lines
                .iter()
                .filter(|l| l.contains(&format!("\"Action\":\"{wanted}\"")))
                .count()
        };
        let summary = summarize(&lines.join("\n"));
        prop_assert_eq!(summary.pass, count("pass"));
        prop_assert_eq!(summary.skip, count("skip"));
        prop_assert_eq!(summary.fail, count("fail"));
    }

    /// Property: exit code is non-zero exactly when nothing passed
    #[test]
    fn exit_code_follows_pass_count(lines in event_log()) {
        let summary = summarize(&lines.join("\n"));
        prop_assert_eq!(summary.exit_code() != 0, summary.pass == 0);
    }

    /// Property: noise lines do not change the counts
    #[test]
    fn noise_does_not_change_summary((clean, noisy) in with_noise()) {
        prop_assert_eq!(summarize(&noisy.join("\n")), summarize(&clean.join("\n")));
    }
}
