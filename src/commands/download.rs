use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use seatplan_core::CalendarEvent;
use seatplan_core::download::{DirectorySaver, download_ics};

pub fn run(event: &CalendarEvent, filename: Option<&str>, dir: PathBuf) -> Result<()> {
    let saver = DirectorySaver::new(dir);

    let path = download_ics(event, filename, &saver)
        .with_context(|| format!("Could not save calendar file to {}", saver.dir().display()))?;

    println!("{}", format!("  Saved: {}", path.display()).green());

    Ok(())
}
