#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the metric-delta binary.
#[macro_export]
macro_rules! metric_delta {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("metric-delta"))
    };
}

/// Project config that keeps scans independent of any surrounding gitignore.
pub const PLAIN_CONFIG: &str = "[scanner]\ngitignore = false\n";

pub const SIMPLE_MODULE: &str = "\
import os


def load(path):
    if os.path.exists(path):
        return open(path).read()
    return None
";

/// A throwaway project directory for driving the binary.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a project holding only [`PLAIN_CONFIG`].
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_config(PLAIN_CONFIG);
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".metric-delta.toml", content);
    }

    /// Path of the revision history for `archiver`.
    pub fn history_path(&self, archiver: &str) -> std::path::PathBuf {
        self.dir
            .path()
            .join(".metric-delta")
            .join(format!("{archiver}.json"))
    }

    /// `metric-delta` command running inside the project.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = crate::metric_delta!();
        cmd.current_dir(self.dir.path()).env("NO_COLOR", "1");
        cmd
    }

    /// Records a snapshot, panicking if the command fails.
    pub fn snapshot(&self) {
        self.command().args(["snapshot", "-q"]).assert().success();
    }
}
