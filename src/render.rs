//! Terminal rendering for seatplan-core types.

use owo_colors::OwoColorize;
use seatplan_core::ics::ValidatedEvent;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ValidatedEvent {
    fn render(&self) -> String {
        let mut lines = vec![format!("  {}", self.summary.bold())];

        let time = match self.end {
            Some(end) => format!(
                "{} → {}",
                self.start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M UTC")
            ),
            None => self.start.format("%Y-%m-%d %H:%M UTC").to_string(),
        };
        lines.push(format!("  {}", time.dimmed()));

        if let Some(ref loc) = self.location {
            lines.push(format!("  📍 {}", loc));
        }
        if let Some(ref url) = self.url {
            lines.push(format!("  🔗 {}", url));
        }
        lines.push(format!("  {}", format!("UID {}", self.uid).dimmed()));

        lines.join("\n")
    }
}
