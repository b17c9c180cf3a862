use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SortOption;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// Tree file to browse instead of the built-in sample
    #[serde(default)]
    pub tree_path: Option<PathBuf>,
    #[serde(default)]
    pub default_sort: SortOption,
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            icon_mode: default_icon_mode(),
            tree_path: None,
            default_sort: SortOption::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/docbrowse/config.yaml`
/// then `./config.yaml` are tried, and `None` means "use defaults".
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docbrowse").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
