use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hosted explorer backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://base-explorer-backend.onrender.com";

/// Environment variable overriding the configured API URL
pub const API_URL_ENV: &str = "BEX_API_URL";

const MAX_RECENT_SEARCHES: usize = 10;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    #[serde(default)]
    pub recent_searches: Vec<String>,
    /// Where `save` writes to. `None` keeps the config in memory only.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Returns the config directory path (~/.config/bex on Linux/macOS)
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("bex"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log file path used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("bex.log"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        let mut config: Self = toml::from_str(&contents).context("Failed to parse config file")?;
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {dir:?}"))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Set the API URL and persist
    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = Some(url);
        self.save()
    }

    /// Resolve the backend URL: flag, then environment, then config file, then default
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        pick_api_url(flag, env.as_deref(), self.api_url.as_deref())
    }

    /// Add a search to recent history (keeps last 10)
    pub fn add_recent_search(&mut self, query: String) -> Result<()> {
        // Remove if already exists to avoid duplicates
        self.recent_searches.retain(|s| s != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
        self.save()
    }

    pub fn remove_recent_search(&mut self, index: usize) -> Result<()> {
        if index < self.recent_searches.len() {
            self.recent_searches.remove(index);
            self.save()?;
        }
        Ok(())
    }
}

fn pick_api_url(flag: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [flag, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
