use crate::paths::AppDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_config_version")]
    pub config_version: u32,
    /// Store the browser selects when the user has not picked one.
    #[serde(default)]
    pub default_store: Option<String>,
    /// Per-store settings, keyed by store id.
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            default_store: None,
            stores: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Settings for one registered asset store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_enabled")]
    pub enabled: bool,
    /// Override for the store's backend endpoint; mainly for staging setups.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: default_store_enabled(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    #[serde(default = "default_stdout_enabled")]
    pub stdout: bool,
    /// File stem for daily-rolling log output; `None` disables file logging.
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            stdout: default_stdout_enabled(),
            file_name: None,
            max_log_files: default_max_log_files(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("config validation failed: {0}")]
    Validation(ValidationError),
    #[error("failed to prepare configuration directories: {0}")]
    Directories(#[from] crate::paths::DirsError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unsupported config_version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl Config {
    pub fn load_or_default(dirs: &AppDirs) -> Result<Self, ConfigError> {
        dirs.ensure_exists()?;
        let path = Self::config_path(dirs);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    pub fn config_path(dirs: &AppDirs) -> PathBuf {
        dirs.config_dir().join("config.toml")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.config_version != CURRENT_CONFIG_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                found: self.config_version,
                expected: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(())
    }

    /// Settings for the given store; defaults apply when the config has no
    /// table for it.
    pub fn store(&self, id: &str) -> StoreConfig {
        self.stores.get(id).cloned().unwrap_or_default()
    }
}

fn default_config_version() -> u32 {
    CURRENT_CONFIG_VERSION
}

fn default_store_enabled() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_stdout_enabled() -> bool {
    true
}

fn default_max_log_files() -> usize {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.logging.stdout);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.stores.is_empty());
    }

    #[test]
    fn invalid_version_rejected() {
        let mut config = Config::default();
        config.config_version = CURRENT_CONFIG_VERSION + 1;
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn store_tables_parse_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            config_version = 1
            default_store = "laubwerk"

            [stores.laubwerk]
            base_url = "https://stage.api.laubwerk.com/1/search"
            "#,
        )
        .expect("config should parse");

        let store = config.store("laubwerk");
        assert!(store.enabled);
        assert_eq!(
            store.base_url.as_deref(),
            Some("https://stage.api.laubwerk.com/1/search")
        );
        assert_eq!(config.default_store.as_deref(), Some("laubwerk"));
    }

    #[test]
    fn unknown_store_gets_defaults() {
        let config = Config::default();
        let store = config.store("missing");
        assert!(store.enabled);
        assert_eq!(store.base_url, None);
    }
}
