use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use forecast_core::RequestConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_LATITUDE: f64 = 55.6302;
pub const DEFAULT_LONGITUDE: f64 = 37.6045;
pub const DEFAULT_FORECAST_DAYS: u8 = 2;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// latitude = 55.6302
/// longitude = 37.6045
/// forecast_days = 2
/// tomorrow = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub forecast_days: u8,
    /// Always append tomorrow's forecast, not only in the evening.
    pub tomorrow: bool,
    /// Optional Open-Meteo compatible host, e.g. "https://api.open-meteo.com/v1".
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            forecast_days: DEFAULT_FORECAST_DAYS,
            tomorrow: false,
            base_url: None,
        }
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub forecast_days: Option<u8>,
    pub tomorrow: bool,
}

impl Config {
    /// Merge stored values with command-line overrides.
    pub fn request_config(&self, overrides: &Overrides) -> RequestConfig {
        RequestConfig::new(
            overrides.latitude.unwrap_or(self.latitude),
            overrides.longitude.unwrap_or(self.longitude),
            overrides.forecast_days.unwrap_or(self.forecast_days),
            overrides.tomorrow || self.tomorrow,
        )
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.request_config(&Overrides::default())
            .validate()
            .context("Stored configuration is invalid")?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
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

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
