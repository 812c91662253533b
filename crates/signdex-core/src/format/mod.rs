//! Output formatting for sign and event listings.
//!
//! This module renders the display views in two shapes:
//! - **TTY**: human-readable terminal output
//! - **JSON**: machine-readable output for `--json`
//!
//! Formatting is pure string construction over the view types; fetching and
//! printing stay with the caller.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::event::EventView;
use crate::sign::SignView;

/// The output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum description length (truncated with an ellipsis).
    pub max_description_length: Option<usize>,
    /// Text shown when a listing is empty.
    pub no_results_text: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_description_length: None,
            no_results_text: "No results".to_string(),
        }
    }
}

/// Truncates `text` to at most `max` characters, ending with an ellipsis.
pub fn ellipsis(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    let truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    Cow::Owned(format!("{}…", truncated))
}

/// JSON payload for a sign listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignListing {
    /// Number of signs returned.
    pub count: usize,
    /// The signs themselves.
    pub signs: Vec<SignView>,
}

/// JSON payload for an event listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListing {
    /// Number of events returned.
    pub count: usize,
    /// The events themselves.
    pub events: Vec<EventEntry>,
}

/// One event in JSON output, with stamps flattened to display strings.
///
/// A malformed stamp appears as the literal `Invalid Date` sentinel here
/// too; machine consumers see the same value a terminal user does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl EventEntry {
    /// Flattens a view into the JSON shape.
    pub fn from_view(view: &EventView) -> Self {
        Self {
            summary: view.summary.clone(),
            description: view.description.clone(),
            location: view.location.clone(),
            start: view.start.as_ref().map(|s| s.as_str().to_string()),
            end: view.end.as_ref().map(|s| s.as_str().to_string()),
        }
    }
}

/// Output formatter for sign and event listings.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    options: FormatOptions,
}

impl OutputFormatter {
    /// Creates a new formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new formatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Formats a sign listing in the requested output format.
    pub fn format_signs(&self, format: OutputFormat, signs: &[SignView]) -> String {
        match format {
            OutputFormat::Tty => self.signs_tty(signs),
            OutputFormat::Json => self.signs_json(signs),
        }
    }

    /// Formats an event listing in the requested output format.
    pub fn format_events(&self, format: OutputFormat, events: &[EventView]) -> String {
        match format {
            OutputFormat::Tty => self.events_tty(events),
            OutputFormat::Json => self.events_json(events),
        }
    }

    /// Formats signs for TTY output, one entry per sign.
    pub fn signs_tty(&self, signs: &[SignView]) -> String {
        if signs.is_empty() {
            return self.options.no_results_text.clone();
        }

        let mut lines = Vec::new();
        for sign in signs {
            lines.push(format!("{}: {}", sign.id, self.clip(&sign.description)));
            if let Some(ref url) = sign.image_url {
                lines.push(format!("    {}", url));
            }
        }
        lines.join("\n")
    }

    /// Formats signs as a pretty-printed JSON listing.
    pub fn signs_json(&self, signs: &[SignView]) -> String {
        let listing = SignListing {
            count: signs.len(),
            signs: signs.to_vec(),
        };
        serde_json::to_string_pretty(&listing).expect("listing serializes to JSON")
    }

    /// Formats events for TTY output, blank-line separated.
    pub fn events_tty(&self, events: &[EventView]) -> String {
        if events.is_empty() {
            return self.options.no_results_text.clone();
        }

        let mut lines = Vec::new();
        for (i, event) in events.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(event.title().to_string());
            if let Some(ref description) = event.description {
                lines.push(format!("  {}", self.clip(description)));
            }
            if let Some(range) = event.date_range() {
                lines.push(format!("  Date: {}", range));
            }
            if let Some(ref location) = event.location {
                lines.push(format!("  Location: {}", location));
            }
        }
        lines.join("\n")
    }

    /// Formats events as a pretty-printed JSON listing.
    pub fn events_json(&self, events: &[EventView]) -> String {
        let listing = EventListing {
            count: events.len(),
            events: events.iter().map(EventEntry::from_view).collect(),
        };
        serde_json::to_string_pretty(&listing).expect("listing serializes to JSON")
    }

    fn clip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.options.max_description_length {
            Some(max) => ellipsis(text, max),
            None => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod golden_tests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_record;
    use crate::sign::Sign;

    fn sign_view(id: u32, description: &str) -> SignView {
        SignView::new(Sign {
            id,
            description: description.into(),
        })
    }

    #[test]
    fn ellipsis_leaves_short_text_alone() {
        assert_eq!(ellipsis("hello", 10), "hello");
        assert_eq!(ellipsis("hello", 5), "hello");
    }

    #[test]
    fn ellipsis_truncates_long_text() {
        assert_eq!(ellipsis("hello world", 5), "hell…");
    }

    #[test]
    fn ellipsis_counts_chars_not_bytes() {
        assert_eq!(ellipsis("kōrero mai", 20), "kōrero mai");
        assert_eq!(ellipsis("kōrero mai", 7), "kōrero…");
    }

    #[test]
    fn empty_sign_listing_uses_no_results_text() {
        let formatter = OutputFormatter::new(FormatOptions {
            no_results_text: "No signs found".into(),
            ..Default::default()
        });
        assert_eq!(formatter.signs_tty(&[]), "No signs found");
    }

    #[test]
    fn empty_event_listing_uses_no_results_text() {
        let formatter = OutputFormatter::with_defaults();
        assert_eq!(formatter.events_tty(&[]), "No results");
    }

    #[test]
    fn sign_tty_includes_image_url_when_present() {
        let formatter = OutputFormatter::with_defaults();
        let signs = [
            sign_view(12, "hello").with_image_url("https://example.test/SignImage/12"),
            sign_view(47, "thank you"),
        ];
        let out = formatter.signs_tty(&signs);
        assert!(out.contains("12: hello"));
        assert!(out.contains("    https://example.test/SignImage/12"));
        assert!(out.contains("47: thank you"));
    }

    #[test]
    fn description_clipping_applies_to_events() {
        let formatter = OutputFormatter::new(FormatOptions {
            max_description_length: Some(10),
            ..Default::default()
        });
        let view = crate::event::EventView::from_record(&parse_record(
            "SUMMARY:Long\nDESCRIPTION:A very long description indeed",
        ));
        let out = formatter.events_tty(&[view]);
        assert!(out.contains("A very lo…"));
    }

    #[test]
    fn events_json_flattens_sentinel() {
        let formatter = OutputFormatter::with_defaults();
        let view = crate::event::EventView::from_record(&parse_record(
            "SUMMARY:Bad\nDTSTART:garbage-stamp-123",
        ));
        let json = formatter.events_json(&[view]);
        let listing: EventListing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing.count, 1);
        assert_eq!(listing.events[0].start.as_deref(), Some("Invalid Date"));
        assert!(listing.events[0].end.is_none());
    }

    #[test]
    fn format_dispatch_matches_specific_methods() {
        let formatter = OutputFormatter::with_defaults();
        let signs = [sign_view(1, "one")];
        assert_eq!(
            formatter.format_signs(OutputFormat::Tty, &signs),
            formatter.signs_tty(&signs)
        );
        assert_eq!(
            formatter.format_signs(OutputFormat::Json, &signs),
            formatter.signs_json(&signs)
        );
    }
}
