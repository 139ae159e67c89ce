use std::io::Write;

use anyhow::Result;
use seatplan_core::CalendarEvent;
use seatplan_core::ics::{CRLF, generate_ics};

pub fn run(event: &CalendarEvent) -> Result<()> {
    write_ics(&mut std::io::stdout().lock(), event)
}

/// The document plus a closing CRLF, so every printed line is CRLF-terminated.
fn write_ics(out: &mut impl Write, event: &CalendarEvent) -> Result<()> {
    write!(out, "{}{CRLF}", generate_ics(event))?;
    out.flush()?;
    Ok(())
}
