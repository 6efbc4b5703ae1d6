//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Sandboxed filesystem root for integration tests
///
/// Wraps a temporary directory and provides utilities for laying out
/// test trees next to the handles under test.
pub struct Sandbox {
    /// Temporary directory backing the sandbox
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// Create a new sandbox in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the sandbox root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Resolve a name relative to the sandbox root
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file in the sandbox
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the sandbox
    pub fn create_dir(&self, name: &str) {
        std::fs::create_dir_all(self.join(name)).expect("Failed to create directory");
    }

    /// Check if a path exists in the sandbox
    pub fn file_exists(&self, name: &str) -> bool {
        self.join(name).exists()
    }

    /// Read a file from the sandbox
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.join(name)).expect("Failed to read file")
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
