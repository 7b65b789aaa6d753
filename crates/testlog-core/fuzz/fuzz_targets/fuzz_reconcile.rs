// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the reconciler
//!
//! Splits the input into two logs and checks that comparing a log with
//! itself never reports a regression.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use testlog_core::{reconcile, summarize};

#[derive(Debug, Arbitrary)]
struct Runs<'a> {
    baseline: &'a str,
    comparison: &'a str,
}

fuzz_target!(|runs: Runs<'_>| {
    let _ = reconcile(runs.baseline, runs.comparison);
    let _ = summarize(runs.baseline);
    assert!(reconcile(runs.baseline, runs.baseline).is_empty());
});
