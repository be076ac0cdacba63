//! Integration tests for the command-line quick actions

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn pathos(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pathos").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

#[test]
fn test_print_seeds_from_environment() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".pathos.env");

    pathos(dir.path())
        .args(["--print", "--file", env_file.to_str().unwrap()])
        .env("PATH", "/usr/bin:/bin")
        .assert()
        .success()
        .stdout("export PATH=/usr/bin:/bin\n");

    assert!(!env_file.exists(), "--print must not write the env-file");
}

#[test]
fn test_print_prefers_env_file() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".pathos.env");
    fs::write(&env_file, "export PATH=/a:/b\n").unwrap();

    pathos(dir.path())
        .args(["-p", "-f", env_file.to_str().unwrap()])
        .env("PATH", "/usr/bin:/bin")
        .assert()
        .success()
        .stdout("export PATH=/a:/b\n");
}

#[test]
fn test_print_custom_variable() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join("man.env");

    pathos(dir.path())
        .args(["-p", "--var", "MANPATH", "-f", env_file.to_str().unwrap()])
        .env("MANPATH", "/usr/share/man")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("export MANPATH=/usr/share/man"));
}

#[test]
fn test_print_uses_config_file() {
    let dir = tempdir().unwrap();
    let env_file = dir.path().join("configured.env");
    fs::write(&env_file, "export PATH=/from/config\n").unwrap();

    let config_dir = dir.path().join("pathos");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("[env]\nfile = {:?}\n", env_file.to_str().unwrap()),
    )
    .unwrap();

    pathos(dir.path())
        .arg("--print")
        .assert()
        .success()
        .stdout("export PATH=/from/config\n");
}

#[test]
fn test_broken_config_is_an_error() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("pathos");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[env\nbroken").unwrap();

    pathos(dir.path())
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[cfg(unix)]
#[test]
fn test_non_unicode_variable_fails_without_writing() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let env_file = dir.path().join(".pathos.env");

    pathos(dir.path())
        .args(["--print", "--var", "PATHOS_BYTES", "-f", env_file.to_str().unwrap()])
        .env("PATHOS_BYTES", OsStr::from_bytes(b"/usr/bin:/opt/\xffbin:/bin"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATHOS_BYTES"));

    assert!(!env_file.exists());
}
