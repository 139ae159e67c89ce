//! Outlook web calendar "compose" links.

use crate::datetime::format_outlook_datetime;
use crate::event::CalendarEvent;

use super::build_link;

pub const OUTLOOK_COMPOSE_BASE: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

const COMPOSE_PATH: &str = "/calendar/action/compose";
const RRU: &str = "addevent";

/// Build a link that opens Outlook's new-event form prefilled with the event.
pub fn outlook_calendar_url(event: &CalendarEvent) -> String {
    let start = format_outlook_datetime(event.start_date);
    let end = format_outlook_datetime(event.end_or_default());
    let body = event.details_with_link();

    build_link(
        OUTLOOK_COMPOSE_BASE,
        [
            ("subject", Some(event.title.as_str())),
            ("startdt", Some(start.as_str())),
            ("enddt", Some(end.as_str())),
            ("path", Some(COMPOSE_PATH)),
            ("rru", Some(RRU)),
            ("body", body.as_deref()),
            ("location", event.location.as_deref()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn make_test_event() -> CalendarEvent {
        CalendarEvent::new(
            "Wedding Reception",
            Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap(),
        )
    }

    fn query(link: &str) -> HashMap<String, String> {
        url::Url::parse(link)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn test_outlook_url_minimal() {
        let link = outlook_calendar_url(&make_test_event());
        assert_eq!(
            link,
            "https://outlook.live.com/calendar/0/deeplink/compose\
             ?subject=Wedding+Reception\
             &startdt=2026-06-01T18%3A00%3A00.000Z\
             &enddt=2026-06-01T19%3A00%3A00.000Z\
             &path=%2Fcalendar%2Faction%2Fcompose\
             &rru=addevent"
        );
    }

    #[test]
    fn test_outlook_url_body_and_location() {
        let event = make_test_event()
            .with_description("Dinner at 7")
            .with_location("Grand Hotel")
            .with_url("https://seatplan.app/rsvp/abc");
        let params = query(&outlook_calendar_url(&event));

        assert_eq!(params["subject"], "Wedding Reception");
        assert_eq!(params["startdt"], "2026-06-01T18:00:00.000Z");
        assert_eq!(params["enddt"], "2026-06-01T19:00:00.000Z");
        assert_eq!(params["path"], "/calendar/action/compose");
        assert_eq!(params["rru"], "addevent");
        assert_eq!(
            params["body"],
            "Dinner at 7\n\nMore info: https://seatplan.app/rsvp/abc"
        );
        assert_eq!(params["location"], "Grand Hotel");
    }

    #[test]
    fn test_outlook_url_omits_absent_fields() {
        let params = query(&outlook_calendar_url(&make_test_event()));
        assert!(!params.contains_key("body"));
        assert!(!params.contains_key("location"));
    }
}
