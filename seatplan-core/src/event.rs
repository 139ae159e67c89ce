//! The event description every calendar artifact is generated from.
//!
//! A `CalendarEvent` is built by the caller (usually from a seatplan event
//! record), borrowed by the encoders and never modified by them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length, in minutes, of an event whose end time is not known.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// A single event to put on someone's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    /// When absent, consumers derive an end one hour after `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Reference link (e.g. the event's RSVP page).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        CalendarEvent {
            title: title.into(),
            description: None,
            start_date,
            end_date: None,
            location: None,
            url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The explicit end time, or one hour after the start.
    pub fn end_or_default(&self) -> DateTime<Utc> {
        self.end_date
            .unwrap_or_else(|| self.start_date + Duration::minutes(DEFAULT_DURATION_MINUTES))
    }

    /// Free text for the "details" field of web calendars: the description,
    /// with the URL appended as a "More info" line when there is one.
    pub fn details_with_link(&self) -> Option<String> {
        match (&self.description, &self.url) {
            (Some(desc), Some(url)) => Some(format!("{desc}\n\nMore info: {url}")),
            (Some(desc), None) => Some(desc.clone()),
            (None, Some(url)) => Some(format!("More info: {url}")),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_end_defaults_to_one_hour_after_start() {
        let event = CalendarEvent::new("Dinner", start());
        assert_eq!(
            event.end_or_default(),
            Utc.with_ymd_and_hms(2026, 6, 1, 19, 0, 0).unwrap()
        );
        // The derived end is never stored on the event
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn test_explicit_end_wins() {
        let end = Utc.with_ymd_and_hms(2026, 6, 1, 23, 30, 0).unwrap();
        let event = CalendarEvent::new("Dinner", start()).with_end_date(end);
        assert_eq!(event.end_or_default(), end);
    }

    #[test]
    fn test_details_with_link_merges_description_and_url() {
        let event = CalendarEvent::new("Dinner", start())
            .with_description("Bring a gift")
            .with_url("https://example.com/rsvp/1");
        assert_eq!(
            event.details_with_link().as_deref(),
            Some("Bring a gift\n\nMore info: https://example.com/rsvp/1")
        );
    }

    #[test]
    fn test_details_with_link_url_only() {
        let event = CalendarEvent::new("Dinner", start()).with_url("https://example.com");
        assert_eq!(
            event.details_with_link().as_deref(),
            Some("More info: https://example.com")
        );
    }

    #[test]
    fn test_details_with_link_absent() {
        let event = CalendarEvent::new("Dinner", start());
        assert_eq!(event.details_with_link(), None);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let event: CalendarEvent = toml::from_str(
            r#"
            title = "Wedding Reception"
            start_date = "2026-06-01T18:00:00Z"
            location = "Grand Hotel"
            "#,
        )
        .unwrap();

        assert_eq!(event.title, "Wedding Reception");
        assert_eq!(event.start_date, start());
        assert_eq!(event.location.as_deref(), Some("Grand Hotel"));
        assert_eq!(event.end_date, None);
        assert_eq!(event.url, None);
    }
}
