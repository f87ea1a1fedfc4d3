//! Server configuration file support.
//!
//! Settings are read from an optional `insights.toml` and then overridden by
//! environment variables:
//!
//! | Variable     | Setting              | Default                  |
//! |--------------|----------------------|--------------------------|
//! | `HOST`       | `server.host`        | `0.0.0.0`                |
//! | `PORT`       | `server.port`        | `8080`                   |
//! | `DATA_PATH`  | `data.cleaned_path`  | `googleplay_cleaned.csv` |
//! | `TREND_SEED` | `data.trend_seed`    | unset                    |

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InsightsError, InsightsResult};

pub const CONFIG_FILE_NAME: &str = "insights.toml";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_PATH_ENV: &str = "DATA_PATH";
pub const TREND_SEED_ENV: &str = "TREND_SEED";

/// Contents of `insights.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_cleaned_path")]
    pub cleaned_path: PathBuf,
    /// Fixed seed for sparkline and comparison trends
    #[serde(default)]
    pub trend_seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cleaned_path() -> PathBuf {
    PathBuf::from("googleplay_cleaned.csv")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            cleaned_path: default_cleaned_path(),
            trend_seed: None,
        }
    }
}

/// Resolved settings the server runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub trend_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        InsightsConfig::default().into()
    }
}

impl From<InsightsConfig> for ServerConfig {
    fn from(config: InsightsConfig) -> Self {
        Self {
            host: config.server.host,
            port: config.server.port,
            data_path: config.data.cleaned_path,
            trend_seed: config.data.trend_seed,
        }
    }
}

impl InsightsConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> InsightsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InsightsError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            InsightsError::Configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load `insights.toml` from the first standard location that has one.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> InsightsResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths.iter() {
            if path.exists() {
                log::info!("Using configuration {}", path.display());
                return Self::from_file(path).map(Some);
            }
        }

        Ok(None)
    }
}

impl ServerConfig {
    /// File settings (or defaults) with environment overrides applied.
    pub fn load() -> InsightsResult<Self> {
        let mut config: Self = InsightsConfig::from_default_location()?
            .unwrap_or_default()
            .into();
        config.apply_env()?;
        Ok(config)
    }

    /// Override settings from `HOST`, `PORT`, `DATA_PATH` and `TREND_SEED`.
    pub fn apply_env(&mut self) -> InsightsResult<()> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.port = parse_env(PORT_ENV, &port)?;
        }
        if let Ok(path) = env::var(DATA_PATH_ENV) {
            self.data_path = PathBuf::from(path);
        }
        if let Ok(seed) = env::var(TREND_SEED_ENV) {
            self.trend_seed = Some(parse_env(TREND_SEED_ENV, &seed)?);
        }
        Ok(())
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T>(name: &str, value: &str) -> InsightsResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        InsightsError::Configuration(format!("Invalid {} value '{}': {}", name, value, e))
    })
}
