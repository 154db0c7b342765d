use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::Platform;

#[derive(clap::ValueEnum, Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default_platform: Option<Platform>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub sort_by_signal: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Loads the config at `path`, applies `change` and writes it back.
    ///
    /// A file that fails to parse is reported and left as it is.
    pub fn update_at(path: &Path, change: impl FnOnce(&mut Config)) -> Result<Self> {
        let mut cfg = Self::load_from(path)?;
        change(&mut cfg);
        cfg.save_to(path)?;
        Ok(cfg)
    }

    /// Platform to parse with when none is given on the command line:
    /// the saved default, then the host OS.
    pub fn resolve_platform(&self) -> Option<Platform> {
        self.default_platform.or_else(Platform::host)
    }

    /// Picks the platform for a parse: an explicit `os` tag wins, then the
    /// saved default, then the host OS.
    pub fn select_platform(&self, os: Option<&str>) -> Result<Platform> {
        if let Some(tag) = os {
            return Ok(tag.parse::<Platform>()?);
        }
        match self.resolve_platform() {
            Some(platform) => Ok(platform),
            None => bail!(
                "Cannot infer platform for host OS '{}'; pass --os",
                std::env::consts::OS
            ),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("wifiscan").join("config.toml"))
}
