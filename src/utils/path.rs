//! Path utilities

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Filesystem capability used for validity checks.
///
/// Answers are never cached: every draw asks again, so directories created or
/// removed behind the editor's back show up on the next screen.
pub trait DirProbe {
    fn is_dir(&self, path: &str) -> bool;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl DirProbe for RealFs {
    fn is_dir(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_dir()
    }
}

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Read file content with proper error handling
pub fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write file content, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
