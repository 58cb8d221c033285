use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::feed::DEFAULT_FEED_URL;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional feed URL override; the public data.gov.my endpoint is
    /// used when unset.
    pub feed_url: Option<String>,
}

impl Config {
    /// Effective feed URL: the configured override, or the default
    /// public endpoint.
    pub fn feed_url(&self) -> &str {
        self.feed_url.as_deref().unwrap_or(DEFAULT_FEED_URL)
    }

    pub fn set_feed_url(&mut self, url: String) {
        self.feed_url = Some(url);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-browser", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_public_feed_url() {
        let cfg = Config::default();
        assert_eq!(cfg.feed_url(), DEFAULT_FEED_URL);
    }

    #[test]
    fn configured_url_overrides_the_default() {
        let mut cfg = Config::default();
        cfg.set_feed_url("http://localhost:9000/feed".to_string());

        assert_eq!(cfg.feed_url(), "http://localhost:9000/feed");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_feed_url("http://localhost:9000/feed".to_string());

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back.feed_url(), cfg.feed_url());
    }
}
