//! Shared testing utilities for ensemblegen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ensemblegen` binary within
    /// the workspace directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("ensemblegen").expect("Failed to locate ensemblegen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write an input file under the workspace, returning its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test input file");
        path
    }

    /// Read a file produced under the workspace.
    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read output file")
    }

    /// Assert that a file exists under the workspace.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }
}
