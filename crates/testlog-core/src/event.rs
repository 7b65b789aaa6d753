// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test event decoding
//!
//! This module decodes newline-delimited test events as emitted by
//! `go test -json` (one JSON object per line, with `Test` and `Action` fields).
//! Log files routinely interleave build output and other non-event lines, so
//! decoding is best-effort: a line either yields an [`Event`] or is skipped.
//!
//! # Example
//!
//! ```
//! use testlog_core::event::{Action, parse_events};
//!
//! let log = "# building...\n{\"Test\":\"TestA\",\"Action\":\"pass\"}\n";
//! let events: Vec<_> = parse_events(log).collect();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].action, Some(Action::Pass));
//! ```

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::outcome::Outcome;

// ============================================================================
// Event Types
// ============================================================================

/// The `Action` tag of a test event
///
/// Only `pass`, `fail` and `skip` carry meaning here. Everything else
/// (`run`, `output`, `pause`, `cont`, `build-output`, ...) is kept verbatim
/// in [`Action::Other`] and ignored by the summarizer and reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// Test passed
    Pass,
    /// Test failed
    Fail,
    /// Test was skipped
    Skip,
    /// Any other action
    Other(String),
}

impl Action {
    /// The action as it appears on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pass" => Self::Pass,
            "fail" => Self::Fail,
            "skip" => Self::Skip,
            _ => Self::Other(value),
        }
    }
}

impl From<Action> for String {
    fn from(value: Action) -> Self {
        match value {
            Action::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// A single decoded test event
///
/// Only `Test` and `Action` are read. Every other field (`Time`, `Package`,
/// `Output`, `Elapsed`, ...) is skipped without being validated, and a `Test`
/// or `Action` holding anything other than a string reads as absent. When a
/// key repeats, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Test identifier
    #[serde(rename = "Test", skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Event action
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;

        impl<'de> Visitor<'de> for V {
            type Value = Event;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a test event object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut event = Event::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "Test" => event.test = map.next_value::<StringField>()?.0,
                        "Action" => {
                            event.action = map.next_value::<StringField>()?.0.map(Action::from);
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(event)
            }
        }

        // Arrays and scalars fail here, so only objects become events.
        deserializer.deserialize_map(V)
    }
}

/// A field value that is kept only when it is a string
struct StringField(Option<String>);

impl<'de> Deserialize<'de> for StringField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;

        impl<'de> Visitor<'de> for V {
            type Value = StringField;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(StringField(Some(v.to_string())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(StringField(Some(v)))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(StringField(None))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(StringField(None))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(StringField(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}

impl Event {
    /// The test identifier, if present and non-empty
    #[must_use]
    pub fn test_name(&self) -> Option<&str> {
        self.test.as_deref().filter(|name| !name.is_empty())
    }

    /// The terminal pass/fail outcome this event reports for a named test
    ///
    /// Returns `None` for package-level events and for any action other
    /// than `pass` or `fail`.
    #[must_use]
    pub fn outcome(&self) -> Option<(&str, Outcome)> {
        let name = self.test_name()?;
        let outcome = match self.action.as_ref()? {
            Action::Pass => Outcome::Pass,
            Action::Fail => Outcome::Fail,
            _ => return None,
        };
        Some((name, outcome))
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a single log line
///
/// Returns `None` when the line is not a single well-formed JSON object. A
/// trailing `\r` is accepted as JSON whitespace.
#[must_use]
pub fn parse_line(line: &str) -> Option<Event> {
    serde_json::from_str(line).ok()
}

/// Decode every line of a log, skipping the ones that are not events
///
/// Lines are split on `\n` only, in stream order.
pub fn parse_events(input: &str) -> impl Iterator<Item = Event> + '_ {
    input.split('\n').filter_map(parse_line)
}
