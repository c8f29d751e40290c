use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use days_core::constants::{DATA_DIR_NAME, DEFAULT_EVENTS_FILE};
use serde::Deserialize;

/// Environment variable that overrides the data directory
pub const DAYS_DIR_ENV: &str = "DAYS_DIR";

/// Settings from ~/.config/days/config.toml. Every key is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the events file
    pub data_dir: String,

    /// Events file name inside `data_dir`
    pub events_file: String,

    /// Create the data directory and events file when they are missing
    pub create_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: format!("~/{DATA_DIR_NAME}"),
            events_file: DEFAULT_EVENTS_FILE.to_string(),
            create_missing: true,
        }
    }
}

/// Get the config file path (~/.config/days/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("days");
    Ok(config_dir.join("config.toml"))
}

/// Load config, falling back to defaults when the file does not exist
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Find the user's home directory from HOME, then USERPROFILE
pub fn home_dir() -> Result<PathBuf> {
    home_dir_with(|name| std::env::var(name).ok())
        .context("Unable to determine home directory")
}

fn home_dir_with(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolved locations for this invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub events_path: PathBuf,
}

impl Paths {
    /// `dir_override` wins over the configured data directory. A leading `~`
    /// expands to `home`.
    pub fn resolve(cfg: &Config, home: &Path, dir_override: Option<&str>) -> Paths {
        let raw = dir_override.unwrap_or(cfg.data_dir.as_str());
        let home = home.to_string_lossy().into_owned();
        let data_dir = PathBuf::from(shellexpand::tilde_with_context(raw, || Some(home)).as_ref());
        let events_path = data_dir.join(&cfg.events_file);
        Paths {
            data_dir,
            events_path,
        }
    }
}
