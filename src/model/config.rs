//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub env: EnvConfig,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            language: default_language(),
        }
    }
}

/// Where the edited list comes from and where it is written
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvConfig {
    /// Env-file path; `~` is expanded. Defaults to `~/.pathos.env`.
    #[serde(default)]
    pub file: Option<String>,
    /// Variable seeded from the environment and written as `export VAR=...`
    #[serde(default = "default_variable")]
    pub variable: String,
}

fn default_variable() -> String {
    "PATH".to_string()
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            file: None,
            variable: default_variable(),
        }
    }
}

impl EnvConfig {
    /// Resolved env-file location
    pub fn env_file_path(&self) -> PathBuf {
        match &self.file {
            Some(file) => crate::utils::path::expand_tilde(file),
            None => default_env_file(),
        }
    }
}

/// `<home>/.pathos.env`
pub fn default_env_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".pathos.env")
}

impl Config {
    /// Get the pathos configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("pathos")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from `path`, or return default if it doesn't exist
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        crate::utils::path::write_file(&Self::config_path(), &content)
    }
}
