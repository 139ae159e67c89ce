use anyhow::Result;
use owo_colors::OwoColorize;
use seatplan_core::config::{ENV_PREFIX, SeatplanConfig};

pub fn run() -> Result<()> {
    let config_path = SeatplanConfig::config_path().map_err(|e| anyhow::anyhow!(e))?;
    let config = SeatplanConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Downloads:  {}", config.download_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  app_base_url  {}", config.app_base_url);
    println!(
        "  {}",
        format!("Override with {ENV_PREFIX}_APP_BASE_URL / {ENV_PREFIX}_DOWNLOAD_DIR").dimmed()
    );

    Ok(())
}
