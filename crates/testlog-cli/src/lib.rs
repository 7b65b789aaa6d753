// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testlog library
//!
//! This module exports the command-line layer of testlog for use in
//! integration tests.

pub mod commands;
pub mod config;
pub mod report;

/// Initialize the tracing subscriber
///
/// Logs go to stderr; stdout is reserved for results. `RUST_LOG` directives
/// are honored on top of `level`.
pub fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
