//! Application configuration for Camp Info.
//!
//! User config lives at `~/.campinfo/campinfo.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CampInfoError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "campinfo.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".campinfo";

/// Published schedule sheet (CSV export).
pub const DEFAULT_SCHEDULE_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRtlaZ-xFkl4DWcBjTTLNUSNdMS7LuJVR3LDp-QPjNaY8i7ffqsDgScj03g3lpu8O6LDKkhtXnqZ3Ir/pub?output=csv";

/// Published contacts sheet (CSV export).
pub const DEFAULT_CONTACTS_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSE5hkCpEnoVAVTUZE4RmqX0xnnyY9pgfBelP-sTURTe2di57NrpCIRbES1NIN77drrH1NZG3-BcJ9l/pub?output=csv";

// ---------------------------------------------------------------------------
// Config structs (matching campinfo.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the live sheets are published.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// HTTP fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// `[sources]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// CSV export URL of the schedule sheet. Empty disables the feed.
    #[serde(default = "default_schedule_url")]
    pub schedule_csv_url: String,

    /// CSV export URL of the contacts sheet. Empty disables the feed.
    #[serde(default = "default_contacts_url")]
    pub contacts_csv_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            schedule_csv_url: default_schedule_url(),
            contacts_csv_url: default_contacts_url(),
        }
    }
}

fn default_schedule_url() -> String {
    DEFAULT_SCHEDULE_CSV_URL.into()
}
fn default_contacts_url() -> String {
    DEFAULT_CONTACTS_CSV_URL.into()
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Largest CSV body accepted, in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_max_response_bytes() -> u64 {
    5 * 1024 * 1024
}

// ---------------------------------------------------------------------------
// Runtime settings (merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Feed URLs after merging the config file with CLI overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    /// Schedule sheet URL, if the feed is enabled.
    pub schedule_url: Option<String>,
    /// Contacts sheet URL, if the feed is enabled.
    pub contacts_url: Option<String>,
}

impl From<&AppConfig> for Sources {
    fn from(config: &AppConfig) -> Self {
        Self {
            schedule_url: non_empty(&config.sources.schedule_csv_url),
            contacts_url: non_empty(&config.sources.contacts_csv_url),
        }
    }
}

impl Sources {
    /// Apply CLI/env overrides on top of the config file values.
    pub fn with_overrides(mut self, schedule: Option<&str>, contacts: Option<&str>) -> Self {
        if let Some(url) = schedule {
            self.schedule_url = non_empty(url);
        }
        if let Some(url) = contacts {
            self.contacts_url = non_empty(url);
        }
        self
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Runtime HTTP options handed to the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
    /// Largest body accepted, in bytes.
    pub max_response_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(config: &FetchConfig) -> Self {
        Self {
            timeout_secs: config.timeout_secs,
            max_response_bytes: config.max_response_bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.campinfo/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CampInfoError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.campinfo/campinfo.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CampInfoError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        CampInfoError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CampInfoError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CampInfoError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CampInfoError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
