//! Golden tests for output formatting.
//!
//! Inline insta snapshots pin the exact TTY and JSON shapes. Run
//! `cargo insta review` to update after intentional changes.

use crate::event::EventView;
use crate::format::OutputFormatter;
use crate::record::parse_record;
use crate::sign::{Sign, SignView};

fn sample_events() -> Vec<EventView> {
    let launch = parse_record(
        "BEGIN:VEVENT\n\
         SUMMARY:Sign Language Week Launch\n\
         DESCRIPTION:Taster classes all day\n\
         DTSTART:20240315T140530Z\n\
         DTEND:20240315T160000Z\n\
         LOCATION:Auckland\n\
         END:VEVENT",
    );
    let quiz = parse_record(
        "BEGIN:VEVENT\n\
         SUMMARY:Deaf Club Quiz Night\n\
         DTSTART:not-a-real-date12345\n\
         END:VEVENT",
    );
    vec![
        EventView::from_record(&launch),
        EventView::from_record(&quiz),
    ]
}

fn sample_signs() -> Vec<SignView> {
    vec![
        SignView::new(Sign {
            id: 12,
            description: "hello".into(),
        })
        .with_image_url("https://example.test/SignImage/12"),
        SignView::new(Sign {
            id: 47,
            description: "thank you".into(),
        }),
    ]
}

#[test]
fn tty_event_listing() {
    let out = OutputFormatter::with_defaults().events_tty(&sample_events());
    insta::assert_snapshot!(out, @r"
    Sign Language Week Launch
      Taster classes all day
      Date: 15 March 2024 at 14:05 - 15 March 2024 at 16:00
      Location: Auckland

    Deaf Club Quiz Night
      Date: Invalid Date - ?
    ");
}

#[test]
fn tty_sign_listing() {
    let out = OutputFormatter::with_defaults().signs_tty(&sample_signs());
    insta::assert_snapshot!(out, @r"
    12: hello
        https://example.test/SignImage/12
    47: thank you
    ");
}

#[test]
fn json_sign_listing() {
    let out = OutputFormatter::with_defaults().signs_json(&sample_signs());
    insta::assert_snapshot!(out, @r#"
    {
      "count": 2,
      "signs": [
        {
          "id": 12,
          "description": "hello",
          "image_url": "https://example.test/SignImage/12"
        },
        {
          "id": 47,
          "description": "thank you"
        }
      ]
    }
    "#);
}

#[test]
fn json_event_listing() {
    let out = OutputFormatter::with_defaults().events_json(&sample_events());
    insta::assert_snapshot!(out, @r#"
    {
      "count": 2,
      "events": [
        {
          "summary": "Sign Language Week Launch",
          "description": "Taster classes all day",
          "location": "Auckland",
          "start": "15 March 2024 at 14:05",
          "end": "15 March 2024 at 16:00"
        },
        {
          "summary": "Deaf Club Quiz Night",
          "start": "Invalid Date"
        }
      ]
    }
    "#);
}
