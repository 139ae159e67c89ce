mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use seatplan_core::config::SeatplanConfig;
use tracing_subscriber::EnvFilter;

use crate::input::EventArgs;

/// Environment variable holding the log filter (e.g. `SEATPLAN_LOG=debug`).
const LOG_ENV: &str = "SEATPLAN_LOG";

#[derive(Parser)]
#[command(name = "seatplan")]
#[command(about = "Create calendar files and add-to-calendar links for seatplan events")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the event as an .ics document
    Ics {
        #[command(flatten)]
        event: EventArgs,
    },
    /// Print Google Calendar and Outlook links for the event
    Links {
        #[command(flatten)]
        event: EventArgs,
    },
    /// Save the event as an .ics file
    Download {
        #[command(flatten)]
        event: EventArgs,

        /// File name without extension (defaults to one derived from the title)
        #[arg(long)]
        filename: Option<String>,

        /// Directory to save into (defaults to download_dir from the config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Check that an .ics file is a valid single-event calendar
    Check { file: PathBuf },
    /// Show configuration paths and values
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ics { event } => commands::ics::run(&event.into_event(load_config)?),
        Commands::Links { event } => commands::links::run(&event.into_event(load_config)?),
        Commands::Download {
            event,
            filename,
            dir,
        } => {
            let dir = match dir {
                Some(dir) => dir,
                None => load_config()?.download_path(),
            };
            commands::download::run(&event.into_event(load_config)?, filename.as_deref(), dir)
        }
        Commands::Check { file } => commands::check::run(&file),
        Commands::Config => commands::config::run(),
    }
}

/// Logs go to stderr so generated documents and links can be piped from stdout.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<SeatplanConfig> {
    SeatplanConfig::load().map_err(|e| anyhow::anyhow!(e))
}
