// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testlog-core: Test event log processing
//!
//! This library crate summarizes newline-delimited test event logs (as
//! produced by `go test -json`) and finds regressions between two runs:
//! tests that failed in one run but did not fail in another.
//!
//! Every operation is a pure function of in-memory text. Lines that do not
//! decode as events are skipped, never reported.
//!
//! # Example
//!
//! ```
//! use testlog_core::{reconcile, summarize};
//!
//! let run_a = "{\"Test\":\"TestA\",\"Action\":\"fail\"}\n";
//! let run_b = "{\"Test\":\"TestA\",\"Action\":\"pass\"}\n";
//!
//! assert_eq!(reconcile(run_a, run_b), vec!["TestA".to_string()]);
//! assert_eq!(summarize(run_b).pass, 1);
//! ```

pub mod error;
pub mod event;
pub mod outcome;
pub mod plain;
pub mod reconcile;
pub mod summary;

pub use error::TestlogError;
pub use event::{Action, Event, parse_events, parse_line};
pub use outcome::{Outcome, OutcomeMap};
pub use plain::{PlainResults, PlainStatus, parse_plain_results, read_plain_results};
pub use reconcile::{Regressions, reconcile, reconcile_maps};
pub use summary::{Summary, summarize};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TestlogError;
    pub use crate::outcome::{Outcome, OutcomeMap};
    pub use crate::reconcile::{Regressions, reconcile};
    pub use crate::summary::{Summary, summarize};
}
