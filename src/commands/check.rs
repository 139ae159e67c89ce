use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use seatplan_core::ics::validate_ics;

use crate::render::Render;

pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read {}", file.display()))?;

    match validate_ics(&content) {
        Ok(event) => {
            println!("{} {}", "✓".green(), file.display());
            println!("{}", event.render());
            Ok(())
        }
        Err(e) => {
            tracing::warn!(file = %file.display(), error = %e, "calendar file failed validation");
            anyhow::bail!("{} is not a valid calendar file: {}", file.display(), e);
        }
    }
}
