use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default bound on concurrent upstream lookups
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 8;

/// Default history file, relative to the working directory
pub const DEFAULT_HISTORY_FILE: &str = "version_history.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Run configuration, loaded from a YAML file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Git URL of the aports repository to clone from.
    pub aports_repo_url: String,
    /// Local checkout of the aports repository. A leading `~` expands
    /// to the home directory.
    pub aports_dir: PathBuf,
    /// Maintainer identity to scan for, usually `Name <email>`.
    pub maintainer: String,
    /// Anitya v2 packages endpoint.
    pub release_monitoring_api_url: String,
    pub api_key: String,
    /// Distribution name used when querying the packages endpoint.
    pub distribution: String,
    /// Minimum days between checks of the same package. Zero checks
    /// everything on every run.
    #[serde(default)]
    pub check_interval_days: u64,
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
    #[serde(default)]
    pub telegram_bot_token: Option<String>,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

fn default_concurrency_limit() -> usize {
    DEFAULT_CONCURRENCY_LIMIT
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&raw)?;
        config.validate()?;
        config.aports_dir = expand_tilde(&config.aports_dir, dirs::home_dir());
        config.history_file = expand_tilde(&config.history_file, dirs::home_dir());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("aports_repo_url", &self.aports_repo_url),
            ("maintainer", &self.maintainer),
            (
                "release_monitoring_api_url",
                &self.release_monitoring_api_url,
            ),
            ("api_key", &self.api_key),
            ("distribution", &self.distribution),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        if self.aports_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "aports_dir must not be empty".to_string(),
            ));
        }
        if self.concurrency_limit == 0 {
            return Err(ConfigError::Invalid(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Telegram credentials when both halves are configured.
    pub fn telegram(&self) -> Option<(&str, &str)> {
        match (
            self.telegram_bot_token.as_deref(),
            self.telegram_chat_id.as_deref(),
        ) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}

fn expand_tilde(path: &Path, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
