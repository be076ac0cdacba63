//! The persisted env-file and the environment it is seeded from

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::model::PathList;
use crate::utils::shell_quote::{join_quoted, split_quoted};

lazy_static! {
    /// Matches `export NAME=value` (the `export` keyword is optional)
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw, still-quoted value, up to the end of the content. A
    ///   quoted path may span lines, so `.` also matches newlines.
    static ref EXPORT_RE: Regex =
        Regex::new(r"(?s)^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)=(.*)$").unwrap();
}

/// Read-only view of environment variables
pub trait EnvSource {
    /// `Ok(None)` when unset; an error when set but unreadable
    fn var(&self, name: &str) -> Result<Option<String>>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => {
                Err(e).with_context(|| format!("Cannot read environment variable {}", name))
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get(name).cloned())
    }
}

/// Single-line `export VAR=...` file holding the saved list
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    variable: String,
}

impl EnvFile {
    pub fn new(path: impl Into<PathBuf>, variable: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            variable: variable.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Initial list: the env-file when present, otherwise the environment.
    pub fn load(&self, env: &dyn EnvSource) -> Result<PathList> {
        if self.exists() {
            self.read()
        } else {
            Ok(env
                .var(&self.variable)?
                .map(|value| PathList::from_env_value(&value))
                .unwrap_or_default())
        }
    }

    /// Parse the env-file.
    ///
    /// An empty file gives an empty list. Content that is not an assignment
    /// to our variable is taken as a bare value. The value ends at the first
    /// unquoted newline.
    pub fn read(&self) -> Result<PathList> {
        let content = crate::utils::path::read_file(&self.path)
            .with_context(|| format!("Failed to load env-file {}", self.path.display()))?;
        Ok(self.parse(&content))
    }

    pub fn parse(&self, content: &str) -> PathList {
        let content = content.trim();
        if content.is_empty() {
            return PathList::default();
        }

        let value = match EXPORT_RE.captures(content) {
            Some(caps) if &caps[1] == self.variable => caps.get(2).map_or("", |m| m.as_str()),
            _ => content,
        };

        split_quoted(value.trim_start()).into_iter().collect()
    }

    /// The `export VAR=...` line for `paths`, without trailing newline
    pub fn export_line(&self, paths: &PathList) -> Result<String> {
        Ok(format!(
            "export {}={}",
            self.variable,
            join_quoted(paths.as_slice())?
        ))
    }

    /// Overwrite the env-file with `paths`
    pub fn save(&self, paths: &PathList) -> Result<()> {
        let line = self.export_line(paths)?;
        crate::utils::path::write_file(&self.path, &format!("{}\n", line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn env_with(name: &str, value: &str) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert(name.to_string(), value.to_string());
        env
    }

    #[test]
    fn test_load_from_environment_when_file_missing() {
        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), "PATH");
        let paths = file.load(&env_with("PATH", "/usr/bin:/bin")).unwrap();
        assert_eq!(paths.as_slice(), &["/usr/bin", "/bin"]);
    }

    #[test]
    fn test_load_missing_variable_is_empty() {
        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), "PATH");
        assert!(file.load(&HashMap::<String, String>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_file_takes_priority_over_environment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pathos.env");
        std::fs::write(&path, "export PATH=/a:/b\n").unwrap();

        let file = EnvFile::new(&path, "PATH");
        let paths = file.load(&env_with("PATH", "/usr/bin:/bin")).unwrap();
        assert_eq!(paths.as_slice(), &["/a", "/b"]);
    }

    #[test]
    fn test_parse_empty_file() {
        let file = EnvFile::new("/unused", "PATH");
        assert!(file.parse("").is_empty());
        assert!(file.parse("\n  \n").is_empty());
        assert!(file.parse("export PATH=\n").is_empty());
    }

    #[test]
    fn test_parse_without_prefix() {
        let file = EnvFile::new("/unused", "PATH");
        assert_eq!(file.parse("  /a:/b  \n").as_slice(), &["/a", "/b"]);
    }

    #[test]
    fn test_parse_custom_variable() {
        let file = EnvFile::new("/unused", "MANPATH");
        assert_eq!(
            file.parse("export MANPATH=/usr/share/man\n").as_slice(),
            &["/usr/share/man"]
        );
    }

    #[test]
    fn test_export_line() {
        let file = EnvFile::new("/unused", "PATH");
        let paths: PathList = vec!["/usr/bin", "/bin"].into_iter().collect();
        assert_eq!(file.export_line(&paths).unwrap(), "export PATH=/usr/bin:/bin");
    }

    #[test]
    fn test_save_then_reload_round_trip() {
        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), "PATH");
        let paths: PathList = vec!["/usr/bin", "/opt/my app/bin", "/bin"]
            .into_iter()
            .collect();

        file.save(&paths).unwrap();
        let reloaded = file.load(&HashMap::<String, String>::new()).unwrap();
        assert_eq!(reloaded, paths);
    }

    #[test]
    fn test_newline_in_path_round_trips() {
        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), "PATH");
        let paths: PathList = vec!["/usr/bin", "/opt/a\nb", "/bin"].into_iter().collect();

        file.save(&paths).unwrap();
        let reloaded = file.load(&HashMap::<String, String>::new()).unwrap();
        assert_eq!(reloaded, paths);
    }

    #[test]
    fn test_parse_ignores_trailing_lines() {
        let file = EnvFile::new("/unused", "PATH");
        assert_eq!(
            file.parse("\nexport PATH=/a:/b\n# sourced by ~/.profile\n").as_slice(),
            &["/a", "/b"]
        );
    }

    #[test]
    fn test_process_env_unset_is_none() {
        assert!(ProcessEnv
            .var("PATHOS_TEST_SURELY_UNSET_VARIABLE")
            .unwrap()
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_environment_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "PATHOS_TEST_NON_UNICODE_PATH";
        std::env::set_var(name, OsStr::from_bytes(b"/usr/bin:/opt/\xffbin:/bin"));

        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), name);
        let err = file.load(&ProcessEnv).unwrap_err();
        assert!(err.to_string().contains(name));
        assert!(!file.exists());

        std::env::remove_var(name);
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = tempdir().unwrap();
        let file = EnvFile::new(dir.path().join(".pathos.env"), "PATH");
        let paths: PathList = vec!["/x y", "/z"].into_iter().collect();

        file.save(&paths).unwrap();
        let first = std::fs::read(file.path()).unwrap();
        file.save(&file.read().unwrap()).unwrap();
        let second = std::fs::read(file.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with(b"\n"));
    }
}
