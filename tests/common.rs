//! Shared test helpers.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for hosts files.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_hosts_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostman_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

/// Write a hosts file with the given content into the temp dir.
pub fn write_hosts(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts");
    fs::write(&path, content).unwrap();
    path
}
