//! Display-ready event views.

use serde::{Deserialize, Serialize};

use crate::record::CalendarRecord;
use crate::stamp::{self, StampDisplay};

/// A display-ready view of one event record.
///
/// Built from a parsed [`CalendarRecord`] with both stamps already
/// converted to display form. Absent record fields stay absent; a
/// present-but-malformed stamp becomes [`StampDisplay::Invalid`] and is
/// shown as-is rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    /// The event title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// The event description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The event location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Formatted start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<StampDisplay>,
    /// Formatted end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<StampDisplay>,
}

impl EventView {
    /// Builds a view from a parsed record, formatting both stamps.
    pub fn from_record(record: &CalendarRecord) -> Self {
        Self {
            summary: record.summary.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            start: record.start.as_deref().map(stamp::format_stamp),
            end: record.end.as_deref().map(stamp::format_stamp),
        }
    }

    /// The title shown for this event.
    pub fn title(&self) -> &str {
        self.summary.as_deref().unwrap_or("(untitled)")
    }

    /// The formatted date range, when either endpoint is present.
    ///
    /// A missing endpoint renders as `?`; a malformed one renders as the
    /// invalid-date sentinel.
    pub fn date_range(&self) -> Option<String> {
        if self.start.is_none() && self.end.is_none() {
            return None;
        }
        let start = self.start.as_ref().map_or("?", StampDisplay::as_str);
        let end = self.end.as_ref().map_or("?", StampDisplay::as_str);
        Some(format!("{} - {}", start, end))
    }
}
