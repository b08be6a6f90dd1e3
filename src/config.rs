use crate::alarm::{DEFAULT_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS};
use crate::clock::Zone;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use thiserror::Error;

const APP_DIR: &str = "nudge";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "nudge.log";

/// User configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA zone name; `None` uses the process's local zone
    pub timezone: Option<String>,
    pub poll_interval_secs: u64,
    /// Start in dark mode
    pub dark_mode: bool,
    /// Ring the terminal bell when an alarm fires
    pub bell: bool,
    pub desktop_notifications: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            dark_mode: false,
            bell: true,
            desktop_notifications: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown time zone `{0}` (expected an IANA name such as Europe/Madrid, or `local`)")]
    UnknownTimezone(String),
    #[error("poll interval must be between 1 and {MAX_POLL_INTERVAL_SECS} seconds, got {0}")]
    InvalidInterval(u64),
}

/// Validated runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub zone: Zone,
    pub poll_interval: Duration,
    pub dark_mode: bool,
    pub bell: bool,
    pub desktop_notifications: bool,
}

impl Config {
    /// Override the configured zone (from `--timezone` or `NUDGE_TIMEZONE`)
    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        if timezone.is_some() {
            self.timezone = timezone;
        }
        self
    }

    /// Validate into runtime settings
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let zone = match &self.timezone {
            None => Zone::Local,
            Some(name) => {
                Zone::parse(name).ok_or_else(|| ConfigError::UnknownTimezone(name.clone()))?
            }
        };

        // Alarms match on the exact minute; a longer interval can step over one
        if !(1..=MAX_POLL_INTERVAL_SECS).contains(&self.poll_interval_secs) {
            return Err(ConfigError::InvalidInterval(self.poll_interval_secs));
        }

        Ok(Settings {
            zone,
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            dark_mode: self.dark_mode,
            bell: self.bell,
            desktop_notifications: self.desktop_notifications,
        })
    }

    /// Log file from config, falling back to the platform data directory
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => {
                let data = dirs::data_local_dir().context("Could not determine data directory")?;
                Ok(data.join(APP_DIR).join(LOG_FILE))
            }
        }
    }
}

/// Default config path: <config_dir>/nudge/config.json
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load config from a JSON file. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Write a default config file, refusing to overwrite an existing one
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(&Config::default())?;
    atomic_write(path, &json)
}

/// Write a file via a temp file in the same directory, then rename into place
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
