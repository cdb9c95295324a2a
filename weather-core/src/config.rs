use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::openweather::{DEFAULT_BASE_URL, OpenWeatherClient};

pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_PORT: u16 = 5050;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// country = "US"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Country scope for geocoding lookups.
    pub country: String,

    pub base_url: String,

    /// Listen port for the proxy server.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_toml(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file yet.
            Self::default()
        };

        cfg.with_env_overrides(|name| std::env::var(name).ok())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `WEATHER_API_KEY`, `WEATHER_COUNTRY`, `WEATHER_BASE_URL` and `PORT`.
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(key) = var("WEATHER_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(country) = var("WEATHER_COUNTRY").filter(|c| !c.trim().is_empty()) {
            self.country = country;
        }
        if let Some(url) = var("WEATHER_BASE_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(port) = var("PORT") {
            self.port = port.parse().with_context(|| format!("Invalid PORT value: {port}"))?;
        }
        Ok(self)
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
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key, if one is configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    /// Build the OpenWeather client, or fail with a configuration hint.
    pub fn client(&self) -> Result<OpenWeatherClient> {
        let api_key = self.api_key().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set WEATHER_API_KEY."
            )
        })?;

        Ok(OpenWeatherClient::with_base_url(api_key.to_owned(), &self.base_url))
    }
}
