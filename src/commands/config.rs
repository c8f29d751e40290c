use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{self, Config, Paths};

/// Print where days keeps its files and the settings in effect.
pub fn run(cfg: &Config, paths: &Paths) -> Result<()> {
    let config_path = config::config_path()?;
    let status = if config_path.exists() { "" } else { " (not found, using defaults)" };

    println!("{} {}{}", "Config file:".bold(), config_path.display(), status.dimmed());
    println!("{} {}", "Data directory:".bold(), paths.data_dir.display());
    println!("{} {}", "Events file:".bold(), paths.events_path.display());
    println!("{} {}", "Create missing:".bold(), cfg.create_missing);

    Ok(())
}
