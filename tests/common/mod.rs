#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the h5lint binary, isolated from the
/// caller's configuration directories.
#[allow(deprecated)]
pub fn h5lint(fixture: &TestFixture) -> Command {
    let mut cmd = Command::cargo_bin("h5lint").expect("binary should exist");
    cmd.current_dir(fixture.path())
        .env("XDG_CONFIG_HOME", fixture.path().join("xdg"))
        .env("HOME", fixture.path())
        .env("NO_COLOR", "1")
        .env_remove("H5LINT_LOG");
    cmd
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a JSON snapshot.
    pub fn create_snapshot(&self, relative_path: &str, doc: &Value) -> PathBuf {
        let text = serde_json::to_string_pretty(doc).expect("snapshot serializes");
        self.create_file(relative_path, text.as_bytes())
    }

    /// Creates `.h5lint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".h5lint.toml", content.as_bytes())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot with no error or safety findings.
pub fn clean_snapshot() -> Value {
    serde_json::json!({
        "objects": {
            "root": {"type": "group", "members": [
                {"name": "temps", "link": "hard", "object": "temps"}
            ], "attributes": {"title": "clean"}},
            "temps": {"type": "dataset", "shape": [4], "dtype": "float64",
                      "data": [1.0, 2.0, 3.0, 4.0]}
        }
    })
}

/// A snapshot whose root holds one external link and a tiny-chunked dataset.
pub fn external_link_snapshot() -> Value {
    serde_json::json!({
        "objects": {
            "root": {"type": "group", "members": [
                {"name": "extlink", "link": "external", "file": "other.h5", "path": "/data"},
                {"name": "grid", "link": "hard", "object": "grid"}
            ]},
            "grid": {"type": "dataset", "shape": [64], "dtype": "int32", "chunks": [2]}
        }
    })
}

/// Parses stdout as the JSON report.
pub fn parse_report(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout is a JSON report")
}
