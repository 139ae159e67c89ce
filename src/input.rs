//! Building a `CalendarEvent` from command-line arguments or an event file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use seatplan_core::CalendarEvent;
use seatplan_core::config::SeatplanConfig;
use seatplan_core::links::rsvp_url;

#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Read the event from a TOML or JSON file
    #[arg(short, long, conflicts_with_all = ["title", "start"])]
    file: Option<PathBuf>,

    /// Event title
    #[arg(short, long, required_unless_present = "file")]
    title: Option<String>,

    /// Start time, RFC 3339 (e.g. "2026-06-01T18:00:00Z")
    #[arg(short, long, required_unless_present = "file")]
    start: Option<String>,

    /// End time, RFC 3339 (defaults to one hour after the start)
    #[arg(short, long, conflicts_with = "duration")]
    end: Option<String>,

    /// Duration instead of an end time (e.g. "3h 30m")
    #[arg(long)]
    duration: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    location: Option<String>,

    /// Reference link shown with the event
    #[arg(short, long, conflicts_with = "rsvp")]
    url: Option<String>,

    /// Link to the RSVP page of this seatplan event id (uses app_base_url)
    #[arg(long)]
    rsvp: Option<String>,
}

impl EventArgs {
    /// Flags given alongside `--file` override the file's fields.
    ///
    /// `load_config` is only called when `--rsvp` needs the app base URL.
    pub fn into_event(
        self,
        load_config: impl FnOnce() -> Result<SeatplanConfig>,
    ) -> Result<CalendarEvent> {
        let mut event = match (&self.file, self.title, &self.start) {
            (Some(path), _, _) => read_event_file(path)?,
            (None, Some(title), Some(start)) => CalendarEvent::new(title, parse_datetime(start)?),
            _ => anyhow::bail!("Either --file or both --title and --start are required"),
        };

        if let Some(ref end) = self.end {
            event.end_date = Some(parse_datetime(end)?);
        } else if let Some(ref duration) = self.duration {
            let duration = humantime::parse_duration(duration)
                .with_context(|| format!("Invalid duration \"{duration}\""))?;
            let end = chrono::Duration::from_std(duration)
                .ok()
                .and_then(|duration| event.start_date.checked_add_signed(duration));
            match end {
                Some(end) => event.end_date = Some(end),
                None => anyhow::bail!("Duration too long"),
            }
        }

        if self.description.is_some() {
            event.description = self.description;
        }
        if self.location.is_some() {
            event.location = self.location;
        }
        if self.url.is_some() {
            event.url = self.url;
        }
        if let Some(ref event_id) = self.rsvp {
            event.url = Some(rsvp_url(&load_config()?, event_id)?);
        }

        if event.title.trim().is_empty() {
            tracing::warn!("event has an empty title");
        }
        if event.end_date.is_some_and(|end| end < event.start_date) {
            anyhow::bail!("End time is before the start time");
        }

        tracing::debug!(?event, "event input");
        Ok(event)
    }
}

fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| {
            format!("Could not parse date/time \"{input}\" (expected e.g. 2026-06-01T18:00:00Z)")
        })
}

fn read_event_file(path: &Path) -> Result<CalendarEvent> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read event file {}", path.display()))?;

    let event = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid event JSON in {}", path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Invalid event TOML in {}", path.display()))?,
    };

    Ok(event)
}
