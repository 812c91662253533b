//! Compact calendar timestamps.
//!
//! Event records carry datetimes in the fixed-width `YYYYMMDDTHHMMSS[Z]`
//! notation. [`decompose`] slices out the components by character offset and
//! [`format_stamp`] renders them for display. Nothing here validates numeric
//! ranges up front: the datetime construction in [`StampParts::to_utc`] is
//! the sole arbiter of validity, and a stamp that fails it surfaces as the
//! [`INVALID_DATE`] sentinel instead of an error.

use std::fmt;
use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display sentinel for a stamp that does not yield a valid datetime.
pub const INVALID_DATE: &str = "Invalid Date";

/// Component slices of a compact timestamp.
///
/// Offsets are fixed: 0-3 year, 4-5 month, 6-7 day, 9-10 hour, 11-12 minute,
/// 13-14 second. Position 8 is the `T` separator and is skipped. Input too
/// short for a slice yields an empty component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampParts<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: &'a str,
}

impl StampParts<'_> {
    /// Reassembles the components into an RFC 3339 UTC string and parses it.
    ///
    /// Non-numeric or out-of-range components (month `13`, empty slices from
    /// short input) fail the parse and come back as `None`, never a panic.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let iso = format!(
            "{}-{}-{}T{}:{}:{}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        );
        DateTime::parse_from_rfc3339(&iso)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Slices a compact timestamp into its components by fixed offsets.
pub fn decompose(stamp: &str) -> StampParts<'_> {
    let field = |range: Range<usize>| stamp.get(range).unwrap_or("");
    StampParts {
        year: field(0..4),
        month: field(4..6),
        day: field(6..8),
        hour: field(9..11),
        minute: field(11..13),
        second: field(13..15),
    }
}

/// A display-ready rendering of a compact timestamp.
///
/// The invalid case is an explicit variant rather than an error so malformed
/// stamps propagate silently to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StampDisplay {
    /// The stamp parsed; holds the formatted display string.
    Formatted(String),
    /// The stamp did not parse; displays as [`INVALID_DATE`].
    Invalid,
}

impl StampDisplay {
    /// Returns `true` for the invalid-date case.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// The display string, the sentinel included.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(text) => text,
            Self::Invalid => INVALID_DATE,
        }
    }
}

impl fmt::Display for StampDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a compact timestamp for display.
///
/// Renders the UTC instant as day, full month name, year and 24-hour
/// `HH:MM`, e.g. `15 March 2024 at 14:05`. Seconds are parsed but not
/// shown.
pub fn format_stamp(stamp: &str) -> StampDisplay {
    match decompose(stamp).to_utc() {
        Some(dt) => StampDisplay::Formatted(dt.format("%-d %B %Y at %H:%M").to_string()),
        None => StampDisplay::Invalid,
    }
}
