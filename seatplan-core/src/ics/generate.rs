//! ICS document generation.

use chrono::{DateTime, Utc};

use crate::datetime::format_ics_datetime;
use crate::event::CalendarEvent;
use crate::ics::escape::escape_text;
use crate::ics::fold::fold_line;
use crate::ics::uid::generate_uid;

pub const PRODID: &str = "-//Seatplan//Seating Planner//EN";

/// Line terminator required by RFC 5545.
pub const CRLF: &str = "\r\n";

/// MIME type of generated documents.
pub const ICS_CONTENT_TYPE: &str = "text/calendar;charset=utf-8";

/// Generate a single-event calendar document, stamped with the current time
/// and a fresh UID.
pub fn generate_ics(event: &CalendarEvent) -> String {
    let now = Utc::now();
    let uid = generate_uid(now);
    tracing::debug!(%uid, title = %event.title, "generating ics document");
    generate_ics_at(event, now, &uid)
}

/// Same as [`generate_ics`], with the DTSTAMP time and UID supplied by the caller.
pub fn generate_ics_at(event: &CalendarEvent, now: DateTime<Utc>, uid: &str) -> String {
    let end = event.end_or_default();

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", format_ics_datetime(now)),
        format!("DTSTART:{}", format_ics_datetime(event.start_date)),
        format!("DTEND:{}", format_ics_datetime(end)),
        text_property("SUMMARY", &event.title),
    ];

    if let Some(ref desc) = event.description {
        lines.push(text_property("DESCRIPTION", desc));
    }

    if let Some(ref loc) = event.location {
        lines.push(text_property("LOCATION", loc));
    }

    // URI values are not TEXT, so they are folded but never escaped
    if let Some(ref url) = event.url {
        lines.push(fold_line(&format!("URL:{url}")));
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.join(CRLF)
}

fn text_property(name: &str, value: &str) -> String {
    fold_line(&format!("{}:{}", name, escape_text(value)))
}
