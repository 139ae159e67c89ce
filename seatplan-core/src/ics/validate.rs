//! Minimal conformance check for single-event ICS documents, using the
//! icalendar crate's parser.

use chrono::{DateTime, Utc};
use icalendar::parser::{Component, read_calendar, unfold};

use crate::datetime::parse_ics_datetime;
use crate::error::{SeatplanError, SeatplanResult};
use crate::ics::escape::unescape_text;
use crate::ics::fold::MAX_LINE_LENGTH;

/// The fields read back from a validated document, with TEXT values unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvent {
    pub uid: String,
    pub stamp: DateTime<Utc>,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

/// Check that `content` is a CRLF-delimited VCALENDAR with one VEVENT carrying
/// UID, DTSTAMP, DTSTART and SUMMARY, and no physical line over 75 characters.
pub fn validate_ics(content: &str) -> SeatplanResult<ValidatedEvent> {
    check_physical_lines(content)?;

    let trimmed = content.trim_end_matches("\r\n");
    if !trimmed.starts_with("BEGIN:VCALENDAR") || !trimmed.ends_with("END:VCALENDAR") {
        return Err(SeatplanError::IcsInvalid(
            "document must be wrapped in BEGIN:VCALENDAR/END:VCALENDAR".into(),
        ));
    }

    let mut unfolded = unfold(content);
    if !unfolded.ends_with('\n') {
        unfolded.push_str("\r\n");
    }
    let calendar =
        read_calendar(&unfolded).map_err(|e| SeatplanError::IcsParse(e.to_string()))?;

    // Depending on how the parser nests VCALENDAR, events show up either at
    // the top level or as its children.
    let vevents: Vec<&Component> = calendar
        .components
        .iter()
        .flat_map(|c| {
            if c.name == "VCALENDAR" {
                c.components.iter().collect::<Vec<_>>()
            } else {
                vec![c]
            }
        })
        .filter(|c| c.name == "VEVENT")
        .collect();

    let vevent = match vevents.as_slice() {
        [vevent] => *vevent,
        [] => return Err(SeatplanError::IcsInvalid("missing VEVENT".into())),
        _ => {
            return Err(SeatplanError::IcsInvalid(
                "expected exactly one VEVENT".into(),
            ));
        }
    };

    let uid = required(vevent, "UID")?;
    let stamp = parse_ics_datetime(&required(vevent, "DTSTAMP")?)?;
    let start = parse_ics_datetime(&required(vevent, "DTSTART")?)?;
    let summary = unescape_text(&required(vevent, "SUMMARY")?);

    let end = optional(vevent, "DTEND")
        .map(|v| parse_ics_datetime(&v))
        .transpose()?;

    if let Some(end) = end {
        if end < start {
            return Err(SeatplanError::IcsInvalid("DTEND is before DTSTART".into()));
        }
    }

    Ok(ValidatedEvent {
        uid,
        stamp,
        summary,
        start,
        end,
        description: optional(vevent, "DESCRIPTION").map(|v| unescape_text(&v)),
        location: optional(vevent, "LOCATION").map(|v| unescape_text(&v)),
        url: optional(vevent, "URL"),
    })
}

fn check_physical_lines(content: &str) -> SeatplanResult<()> {
    for (idx, line) in content.split("\r\n").enumerate() {
        if line.contains('\n') || line.contains('\r') {
            return Err(SeatplanError::IcsInvalid(format!(
                "line {} is not CRLF-terminated",
                idx + 1
            )));
        }
        if line.chars().count() > MAX_LINE_LENGTH {
            return Err(SeatplanError::IcsInvalid(format!(
                "line {} is longer than {} characters",
                idx + 1,
                MAX_LINE_LENGTH
            )));
        }
    }
    Ok(())
}

fn required(component: &Component, name: &str) -> SeatplanResult<String> {
    optional(component, name).ok_or_else(|| SeatplanError::IcsInvalid(format!("missing {name}")))
}

fn optional(component: &Component, name: &str) -> Option<String> {
    component.find_prop(name).map(|p| p.val.to_string())
}
