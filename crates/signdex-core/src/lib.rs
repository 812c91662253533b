//! Core types: calendar records, compact timestamps, signs, formatting

pub mod event;
pub mod format;
pub mod record;
pub mod sign;
pub mod stamp;

pub use event::EventView;
pub use format::{EventListing, FormatOptions, OutputFormat, OutputFormatter, SignListing, ellipsis};
pub use record::{CalendarRecord, parse_record};
pub use sign::{Sign, SignView};
pub use stamp::{INVALID_DATE, StampDisplay, StampParts, decompose, format_stamp};
