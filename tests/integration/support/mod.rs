//! Shared fixtures for integration tests

use std::path::PathBuf;

/// Absolute path of a file under `fixtures/`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `fixtures/`
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {} unreadable: {}", name, e))
}
