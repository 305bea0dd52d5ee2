use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::SyncReportPolicy;

/// Default API base when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base URL of the nutrition API
    pub api_url: ConfigValue<String>,
    /// Build-time bearer token, used when no token is stored locally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Path of the local state store file
    pub state_path: ConfigValue<PathBuf>,
    /// How diary sync reports the follow-up dashboard refresh
    pub sync_report: SyncReportPolicy,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    api_token: Option<String>,
    state_path: Option<PathBuf>,
    sync_report: Option<SyncReportPolicy>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let default_state_path = Self::default_data_dir().join("state.json");

        // Start with defaults
        let mut api_url = ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default);
        let mut api_token = None;
        let mut state_path = ConfigValue::new(default_state_path, ConfigSource::Default);
        let mut sync_report = SyncReportPolicy::default();
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.api_url {
                api_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(token) = file_config.api_token {
                api_token = Some(token);
            }
            if let Some(file_state_path) = file_config.state_path {
                // Resolve relative paths against config file's directory
                let resolved = if file_state_path.is_relative() {
                    path.parent()
                        .map(|p| p.join(&file_state_path))
                        .unwrap_or(file_state_path)
                } else {
                    file_state_path
                };
                state_path = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(policy) = file_config.sync_report {
                sync_report = policy;
            }
        }

        // Apply environment variable overrides
        if let Ok(url) = std::env::var("NICA_API_URL") {
            api_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(token) = std::env::var("NICA_API_TOKEN") {
            api_token = Some(token);
        }
        if let Ok(state) = std::env::var("NICA_STATE_PATH") {
            state_path = ConfigValue::new(PathBuf::from(state), ConfigSource::Environment);
        }

        Ok(Self {
            api_url,
            api_token,
            state_path,
            sync_report,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/nica/
    /// - macOS: ~/Library/Application Support/nica/
    /// - Windows: %APPDATA%/nica/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nica")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/nica/
    /// - macOS: ~/Library/Application Support/nica/
    /// - Windows: %APPDATA%/nica/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nica")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
