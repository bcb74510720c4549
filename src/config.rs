use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::ClientConfig;
use crate::api::constants::DEFAULT_PAGE_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// File the settings were read from, `None` when running on defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            page_limit: default_page_limit(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("datagalaxy-toolbox")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".datagalaxy-toolbox")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let mut config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config.source = Some(config_path.to_path_buf());
        Ok(config)
    }

    /// Report where the settings came from; call once logging is set up
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!("Loaded config from: {:?}", path),
            None => info!("No config file found, using defaults"),
        }
        debug!("Settings: {:?}", self.settings);
    }

    /// HTTP settings, with an optional request timeout override in seconds
    pub fn client_config(&self, timeout_override: Option<u64>) -> ClientConfig {
        let timeout = timeout_override.unwrap_or(self.settings.request_timeout_secs);
        ClientConfig::builder()
            .request_timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(self.settings.connect_timeout_secs))
            .page_limit(self.settings.page_limit)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.source, None);
        assert_eq!(config.settings.request_timeout_secs, 60);
        assert_eq!(config.settings.page_limit, 5000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nrequest_timeout_secs = 15\nlog_file = \"toolbox.log\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.settings.request_timeout_secs, 15);
        assert_eq!(config.settings.connect_timeout_secs, 10);
        assert_eq!(config.settings.log_file, Some(PathBuf::from("toolbox.log")));
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\npage_limit = \"many\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::default();
        assert_eq!(
            config.client_config(None).request_timeout,
            Duration::from_secs(60)
        );
        assert_eq!(
            config.client_config(Some(5)).request_timeout,
            Duration::from_secs(5)
        );
    }
}
