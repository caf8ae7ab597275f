#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "").expect("write empty config");
            dir
        })
        .path()
}

/// Create a configured `sqlref` command suitable for integration tests.
///
/// Uses an empty config file so the developer's own settings never leak in.
#[allow(dead_code)]
pub fn sqlref_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sqlref"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("SQLREF_CONFIG", config_dir().join("config.toml"));
    cmd.env_remove("SQLREF_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Like [`sqlref_cmd`] but with the given config file contents.
#[allow(dead_code)]
pub fn sqlref_cmd_with_config(dir: &TempDir, contents: &str) -> Command {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write config");
    let mut cmd = sqlref_cmd();
    cmd.env("SQLREF_CONFIG", path);
    cmd
}
