use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use seatplan_core::CalendarEvent;
use seatplan_core::download::{DirectorySaver, download_ics};
use seatplan_core::ics::{generate_ics, validate_ics};
use seatplan_core::links::{google_calendar_url, outlook_calendar_url};

fn june_first_six_pm() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap()
}

fn query(link: &str) -> HashMap<String, String> {
    url::Url::parse(link)
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

fn ics_lines(ics: &str) -> Vec<&str> {
    ics.split("\r\n").collect()
}

#[test]
fn wedding_reception_end_to_end() {
    let event =
        CalendarEvent::new("Wedding Reception", june_first_six_pm()).with_location("Grand Hotel");

    let ics = generate_ics(&event);
    let lines = ics_lines(&ics);
    assert!(lines.contains(&"SUMMARY:Wedding Reception"));
    assert!(lines.contains(&"LOCATION:Grand Hotel"));
    assert!(lines.contains(&"DTSTART:20260601T180000Z"));
    assert!(lines.contains(&"DTEND:20260601T190000Z"));

    let google = query(&google_calendar_url(&event));
    assert_eq!(google["dates"], "20260601T180000Z/20260601T190000Z");
    assert_eq!(google["location"], "Grand Hotel");
}

#[test]
fn default_end_is_consistent_across_outputs() {
    let event = CalendarEvent::new("Rehearsal Dinner", june_first_six_pm());

    let ics = generate_ics(&event);
    assert!(ics_lines(&ics).contains(&"DTEND:20260601T190000Z"));

    let google = query(&google_calendar_url(&event));
    assert!(google["dates"].ends_with("/20260601T190000Z"));

    let outlook = query(&outlook_calendar_url(&event));
    assert_eq!(outlook["enddt"], "2026-06-01T19:00:00.000Z");
}

#[test]
fn title_and_start_only_omits_optional_fields() {
    let event = CalendarEvent::new("Rehearsal Dinner", june_first_six_pm());

    let ics = generate_ics(&event);
    for line in ics_lines(&ics) {
        assert!(!line.starts_with("DESCRIPTION"));
        assert!(!line.starts_with("LOCATION"));
        assert!(!line.starts_with("URL"));
    }

    let google = query(&google_calendar_url(&event));
    assert!(!google.contains_key("details"));
    assert!(!google.contains_key("location"));

    let outlook = query(&outlook_calendar_url(&event));
    assert!(!outlook.contains_key("body"));
    assert!(!outlook.contains_key("location"));
}

#[test]
fn generated_document_passes_validation() {
    let event = CalendarEvent::new("Smith, Jones; Reception", june_first_six_pm())
        .with_description("Line one\nLine two with a \\ backslash")
        .with_location("Grand Hotel")
        .with_url("https://seatplan.app/rsvp/evt_1");

    let validated = validate_ics(&generate_ics(&event)).unwrap();
    assert_eq!(validated.start, event.start_date);
    assert_eq!(validated.end, Some(event.end_or_default()));
    assert!(validated.uid.ends_with("@seatplan.app"));
}

#[test]
fn download_saves_file_named_after_title() {
    let dir = tempfile::tempdir().unwrap();
    let saver = DirectorySaver::new(dir.path());
    let event = CalendarEvent::new("Smith & Jones: Wedding!", june_first_six_pm());

    let path = download_ics(&event, None, &saver).unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Smith___Jones__Wedding_.ics")
    );
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(validate_ics(&saved).is_ok());
}
