use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Registry base URL used when no config file sets one.
pub const DEFAULT_URL: &str = "http://localhost:3820";

/// Root configuration structure, deserialized from `.depbro/config.toml`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the DepBro registry.
    pub url: String,
    /// Dependency selection rules.
    pub deps: DepsConfig,
}

/// Controls which declarations are collected.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DepsConfig {
    /// Ordered regex patterns matched against each declaration's group.
    /// A declaration must match ALL of them to be collected; an empty list
    /// collects everything.
    pub included_group_regexes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            deps: DepsConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.depbro/config.toml`
/// 3. `~/.config/depbro/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".depbro").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("depbro").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
