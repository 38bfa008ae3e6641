//! Common test utilities for projectos integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute
//! the user's real data directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with isolated storage.
///
/// Each `TestEnv` creates two temporary directories:
/// - `data_dir`: Holds the project store (via `PO_DATA_DIR` env var)
/// - `work_dir`: Scratch space for context source files
///
/// The `po()` method returns a `Command` that sets `PO_DATA_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub data_dir: TempDir,
    pub work_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the po binary with isolated data directory.
    pub fn po(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_po"));
        cmd.current_dir(self.work_dir.path());
        cmd.env("PO_DATA_DIR", self.data_dir.path());
        cmd
    }

    /// Get the path to the data directory.
    pub fn data_path(&self) -> &Path {
        self.data_dir.path()
    }

    /// Get the path to the scratch work directory.
    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Path of a project's record file inside the store.
    pub fn record_path(&self, project: &str) -> PathBuf {
        self.data_path().join(project).join("project.json")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
