// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for plain-text result tallying

#![no_main]

use libfuzzer_sys::fuzz_target;

use testlog_core::parse_plain_results;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Duplicate names are an error, never a panic
        if let Ok(results) = parse_plain_results(input) {
            assert_eq!(results.total(), results.counts.values().sum::<usize>());
        }
    }
});
