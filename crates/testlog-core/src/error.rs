// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testlog-core

use thiserror::Error;

/// Errors that can occur while processing test logs
///
/// Event streams never produce these: undecodable lines are skipped.
#[derive(Debug, Error)]
pub enum TestlogError {
    /// Error reading test output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The same test name was reported twice in plain-text output
    #[error("Duplicate test name: {name}")]
    DuplicateTest {
        /// The repeated test name
        name: String,
    },
}
