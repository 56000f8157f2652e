//! Common test utilities and helpers

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory pre-populated with JSON input files
pub struct InputDir {
    temp_dir: TempDir,
}

impl InputDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` and return its path as a string argument
    pub fn file(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write input file");
        path.to_string_lossy().to_string()
    }

    /// Absolute argument for a path or pattern inside the directory
    pub fn arg(&self, relative: &str) -> String {
        self.path().join(relative).to_string_lossy().to_string()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
