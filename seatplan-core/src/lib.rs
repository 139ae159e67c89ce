//! Calendar artifacts for seatplan events.
//!
//! From one [`CalendarEvent`] this crate produces:
//! - an RFC 5545 `.ics` document ([`ics::generate_ics`])
//! - a Google Calendar "add event" link ([`links::google_calendar_url`])
//! - an Outlook web "compose" link ([`links::outlook_calendar_url`])
//! - a saved `.ics` file ([`download::download_ics`])

pub mod config;
pub mod datetime;
pub mod download;
pub mod error;
pub mod event;
pub mod ics;
pub mod links;

pub use error::{SeatplanError, SeatplanResult};
pub use event::CalendarEvent;
