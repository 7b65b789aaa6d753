// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line event decoding

#![no_main]

use libfuzzer_sys::fuzz_target;

use testlog_core::parse_line;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Decoding either yields an event or nothing; it must never panic
        if let Some(event) = parse_line(line) {
            let _ = event.outcome();
        }
    }
});
