//! Command execution context

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::env_file::EnvFile;
use crate::i18n::{init_messages, Messages};
use crate::model::Config;

/// Everything resolved from config and command line before running
pub struct Context {
    pub env_file: EnvFile,
    pub messages: &'static Messages,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_default()?;
        Ok(Self::with_config(cli, &config))
    }

    /// Command-line flags take priority over the config file
    pub fn with_config(cli: &Cli, config: &Config) -> Self {
        let messages = init_messages(&config.ui.language);

        let path = cli
            .file
            .clone()
            .unwrap_or_else(|| config.env.env_file_path());
        let variable = cli
            .var
            .clone()
            .unwrap_or_else(|| config.env.variable.clone());

        Self {
            env_file: EnvFile::new(path, variable),
            messages,
        }
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print how to pick up the saved env-file
    pub fn print_reload_hint(&self) {
        let source_cmd = format!("source {}", self.env_file.path().display());
        println!(
            "{} {}",
            "→".cyan(),
            self.messages.reload_hint.replace("{}", &source_cmd).dimmed()
        );
    }
}
