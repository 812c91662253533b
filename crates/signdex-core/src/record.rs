//! Calendar record parsing.
//!
//! Event records arrive as plain text in a line-oriented `KEY:value`
//! interchange format. [`parse_record`] extracts the fields this client
//! displays and ignores everything else, including the `BEGIN:`/`END:`
//! envelope lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fields extracted from one calendar record.
///
/// Absent fields stay `None`; the parser never defaults them. A record is
/// built by a single [`parse_record`] call and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    /// The event title (`SUMMARY`).
    pub summary: Option<String>,
    /// The event description (`DESCRIPTION`).
    pub description: Option<String>,
    /// The raw start stamp (`DTSTART`), still in compact notation.
    pub start: Option<String>,
    /// The raw end stamp (`DTEND`), still in compact notation.
    pub end: Option<String>,
    /// The event location (`LOCATION`).
    pub location: Option<String>,
}

impl CalendarRecord {
    /// Returns `true` if no recognized field was present in the input.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.location.is_none()
    }
}

type FieldSetter = fn(&mut CalendarRecord, String);

/// Recognized keys, matched as exact case-sensitive line prefixes.
///
/// Adding a field is a table change, not a control-flow change.
const FIELDS: &[(&str, FieldSetter)] = &[
    ("SUMMARY:", |record, value| record.summary = Some(value)),
    ("DESCRIPTION:", |record, value| {
        record.description = Some(value)
    }),
    ("DTSTART:", |record, value| record.start = Some(value)),
    ("DTEND:", |record, value| record.end = Some(value)),
    ("LOCATION:", |record, value| record.location = Some(value)),
];

/// Parses one calendar record text into a [`CalendarRecord`].
///
/// Every line is checked against the key table; a match strips the prefix
/// and surrounding whitespace and assigns the value. When a key repeats,
/// the last occurrence wins. Unrecognized lines are skipped silently.
///
/// This is a total function: malformed or empty input yields a (possibly
/// empty) record, never an error.
pub fn parse_record(text: &str) -> CalendarRecord {
    let mut record = CalendarRecord::default();

    for line in text.lines() {
        for (prefix, set) in FIELDS {
            if let Some(rest) = line.strip_prefix(prefix) {
                set(&mut record, rest.trim().to_string());
                break;
            }
        }
    }

    debug!(
        summary = ?record.summary,
        start = ?record.start,
        "parsed calendar record"
    );

    record
}
