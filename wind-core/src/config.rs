use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    model::Coordinate,
    provider::{WindProvider, nasa_power::NASA_POWER_WINDROSE_URL, provider_from_config},
};

/// Top-level configuration stored on disk. Every field has a default, so a
/// missing file or a partial one is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wind rose point endpoint.
    pub endpoint: String,

    /// Example TOML:
    /// [location]
    /// latitude = 33.64
    /// longitude = -84.43
    pub location: Coordinate,
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoint: NASA_POWER_WINDROSE_URL.to_string(), location: Coordinate::DEFAULT }
    }
}

impl Config {
    /// Read the user's config file. A first run has none, which means the
    /// NASA endpoint and the default point.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read wind config at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid wind config at {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Persist the location and endpoint chosen by `wind configure`.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        let dir = path
            .parent()
            .ok_or_else(|| anyhow!("Wind config path has no parent: {}", path.display()))?;

        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create wind config directory {}", dir.display()))?;

        let rendered =
            toml::to_string_pretty(self).context("Cannot render wind config as TOML")?;

        fs::write(&path, rendered)
            .with_context(|| format!("Cannot write wind config to {}", path.display()))
    }

    /// `<platform config dir>/wind-cli/config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        ProjectDirs::from("dev", "wind-task", "wind-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| anyhow!("No home directory to keep the wind config in"))
    }

    /// NASA POWER provider aimed at the configured endpoint.
    pub fn provider(&self) -> Box<dyn WindProvider> {
        provider_from_config(self)
    }
}
