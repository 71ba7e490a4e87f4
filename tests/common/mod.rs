//! Common test utilities for sextant integration tests.
//!
//! Provides `TestEnv` for isolated project roots so tests never touch the
//! developer's working directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
pub use tempfile::TempDir;

/// A test environment with an isolated project root.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Create a new empty project root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the sx binary rooted at this environment.
    ///
    /// Hook-related environment variables are cleared per invocation so
    /// tests stay parallel-safe and independent of the outer shell.
    pub fn sx(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sx"));
        cmd.current_dir(self.root.path());
        cmd.env_remove("TOOL_INPUT_FILE_PATH");
        cmd.env_remove("PROJECT_ROOT");
        cmd.env_remove("SX_AGENT_ID");
        cmd
    }

    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a document relative to the project root, creating parents.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file relative to the project root, empty if absent.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap_or_default()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
