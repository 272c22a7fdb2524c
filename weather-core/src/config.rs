use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{model::UnitSystem, presenter::IconScale};

/// Days after today the provider's daily block can cover.
const FORECAST_DAYS: std::ops::RangeInclusive<usize> = 1..=7;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [server]
/// port = 3000
/// static_dir = "public"
///
/// [display]
/// forecast_days = 4
/// current_icon = "2x"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key, used by the proxy for both upstream calls.
    pub api_key: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as static assets; `None` disables static serving.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000, static_dir: None }
    }
}

/// Upstream endpoints. Overridable so tests can point at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub geocoding_url: String,
    pub onecall_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "https://api.openweathermap.org/geo/1.0/direct".to_string(),
            onecall_url: "https://api.openweathermap.org/data/3.0/onecall".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub forecast_days: usize,
    pub current_icon: IconScale,
    pub forecast_icon: IconScale,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { forecast_days: 5, current_icon: IconScale::X4, forecast_icon: IconScale::X2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub proxy_url: String,
    pub units: UnitSystem,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { proxy_url: "http://127.0.0.1:3000".to_string(), units: UnitSystem::Metric }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Reject settings the dashboard cannot render.
    pub fn validate(&self) -> Result<()> {
        let days = self.display.forecast_days;
        if !FORECAST_DAYS.contains(&days) {
            return Err(anyhow!(
                "display.forecast_days must be between {} and {}, got {days}",
                FORECAST_DAYS.start(),
                FORECAST_DAYS.end(),
            ));
        }

        Ok(())
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay `API_KEY` and `PORT` from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(key) = lookup("API_KEY").filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{port}'"))?;
        }

        Ok(())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the API key or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather configure` or set the API_KEY environment variable."
            )
        })
    }
}
