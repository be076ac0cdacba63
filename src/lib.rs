//! pathos - interactive PATH editor
//!
//! View, reorder, add, remove and de-duplicate the entries of a `PATH`-like
//! variable, then persist the result as a single `export PATH=...` line that a
//! shell profile can source.
//!
//! # Features
//!
//! - Seed from the environment or a previously saved env-file
//! - Highlight missing directories and duplicate entries
//! - Insert, remove, prune missing and de-duplicate entries
//! - Shell-quoted persistence that round-trips paths with spaces

pub mod cli;
pub mod config;
pub mod editor;
pub mod env_file;
pub mod i18n;
pub mod model;
pub mod terminal;
pub mod utils;

pub use editor::{EditError, PathEditor, RowStyle};
pub use env_file::{EnvFile, EnvSource, ProcessEnv};
pub use model::{Config, PathList};
