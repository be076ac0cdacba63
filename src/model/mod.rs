//! Core data models for pathos

mod config;
mod path_list;

pub use config::{default_env_file, Config, EnvConfig, UiConfig};
pub use path_list::PathList;
