//! Google Calendar "TEMPLATE" links.

use crate::datetime::format_ics_datetime;
use crate::event::CalendarEvent;

use super::build_link;

pub const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";

/// Build a link that opens Google Calendar's "add event" form prefilled with
/// the event.
pub fn google_calendar_url(event: &CalendarEvent) -> String {
    let dates = format!(
        "{}/{}",
        format_ics_datetime(event.start_date),
        format_ics_datetime(event.end_or_default())
    );
    let details = event.details_with_link();

    build_link(
        GOOGLE_CALENDAR_BASE,
        [
            ("action", Some("TEMPLATE")),
            ("text", Some(event.title.as_str())),
            ("dates", Some(dates.as_str())),
            ("details", details.as_deref()),
            ("location", event.location.as_deref()),
        ],
    )
}
