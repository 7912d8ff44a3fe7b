use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file that lives as long as the returned directory.
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}
