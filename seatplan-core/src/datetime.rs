//! UTC timestamp encodings used by the calendar outputs.
//!
//! All forms read the instant's UTC fields only, so output never depends on
//! the machine's local timezone.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{SeatplanError, SeatplanResult};

/// RFC 5545 UTC date-time, also accepted by Google Calendar's `dates` parameter.
const ICS_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Format as `YYYYMMDDTHHMMSSZ` (e.g. `20260601T180000Z`).
pub fn format_ics_datetime(dt: DateTime<Utc>) -> String {
    dt.format(ICS_DATETIME_FORMAT).to_string()
}

/// Format as ISO-8601 with milliseconds (e.g. `2026-06-01T18:00:00.000Z`).
pub fn format_outlook_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse the compact form produced by [`format_ics_datetime`].
pub fn parse_ics_datetime(s: &str) -> SeatplanResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, ICS_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| SeatplanError::InvalidDateTime(s.to_string()))
}
