//! Shared helpers for CLI integration tests.

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use tempfile::TempDir;

/// `almanac` isolated from the user's configuration and log settings.
pub fn almanac(config_home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("almanac");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ALMANAC__DATES__FORMAT")
        .env_remove("ALMANAC__OUTPUT__FORMAT")
        .env_remove("ALMANAC__OUTPUT__NO_COLOR");
    cmd
}
