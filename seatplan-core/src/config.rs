//! seatplan configuration.
//!
//! Settings are loaded once and passed explicitly to whatever needs them; the
//! calendar encoders themselves take no configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{SeatplanError, SeatplanResult};

static DEFAULT_APP_BASE_URL: &str = "http://localhost:3000";
static DEFAULT_DOWNLOAD_DIR: &str = "~/Downloads";

/// Prefix of environment variables overriding the config file,
/// e.g. `SEATPLAN_APP_BASE_URL`.
pub const ENV_PREFIX: &str = "SEATPLAN";

fn default_app_base_url() -> String {
    DEFAULT_APP_BASE_URL.to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DOWNLOAD_DIR)
}

fn is_default_download_dir(p: &PathBuf) -> bool {
    *p == default_download_dir()
}

/// Configuration at ~/.config/seatplan/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeatplanConfig {
    /// Base URL of the seatplan web app, used for RSVP links.
    #[serde(default = "default_app_base_url")]
    pub app_base_url: String,

    /// Where downloaded .ics files are saved.
    #[serde(
        default = "default_download_dir",
        skip_serializing_if = "is_default_download_dir"
    )]
    pub download_dir: PathBuf,
}

impl Default for SeatplanConfig {
    fn default() -> Self {
        SeatplanConfig {
            app_base_url: default_app_base_url(),
            download_dir: default_download_dir(),
        }
    }
}

impl SeatplanConfig {
    pub fn config_path() -> SeatplanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SeatplanError::Config("Could not determine config directory".into()))?
            .join("seatplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path, creating a commented-out default
    /// file on first use. `SEATPLAN_*` environment variables take precedence.
    pub fn load() -> SeatplanResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> SeatplanResult<Self> {
        Self::builder(path)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| SeatplanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SeatplanError::Config(e.to_string()))
    }

    fn builder(path: &Path) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(File::from(path.to_path_buf()).required(false))
    }

    /// `download_dir` with `~` expanded.
    pub fn download_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.download_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to the default config path.
    pub fn save(&self) -> SeatplanResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> SeatplanResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SeatplanError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SeatplanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SeatplanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SeatplanResult<()> {
        let contents = format!(
            "\
# seatplan configuration

# Base URL of the web app (used for RSVP links):
# app_base_url = \"{}\"

# Where downloaded .ics files are saved:
# download_dir = \"{}\"
",
            DEFAULT_APP_BASE_URL, DEFAULT_DOWNLOAD_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SeatplanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SeatplanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
