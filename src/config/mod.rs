//! Configuration management module

use anyhow::{Context, Result};

use crate::model::Config;

/// Load the user configuration, or defaults when there is none
pub fn load_or_default() -> Result<Config> {
    let config_path = Config::config_path();
    Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))
}

/// Make sure the config file exists so it can be opened in an editor
pub fn ensure_config_file() -> Result<std::path::PathBuf> {
    let config_path = Config::config_path();
    if !config_path.exists() {
        Config::default().save()?;
    }
    Ok(config_path)
}
