use anyhow::Result;
use owo_colors::OwoColorize;
use seatplan_core::CalendarEvent;
use seatplan_core::links::{google_calendar_url, outlook_calendar_url};

pub fn run(event: &CalendarEvent) -> Result<()> {
    println!("{}", "Google Calendar".bold());
    println!("  {}", google_calendar_url(event));
    println!("{}", "Outlook".bold());
    println!("  {}", outlook_calendar_url(event));

    Ok(())
}
