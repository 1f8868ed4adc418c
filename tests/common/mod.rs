//! Shared testing utilities for claude-status CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated home directory for CLI exercises.
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

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory outside any git repository used as the working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary with `HOME` isolated.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("claude-status").expect("Failed to locate claude-status binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.home().join(".claude")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.claude_dir().join("settings.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.claude_dir().join("config.json")
    }

    pub fn script_path(&self) -> PathBuf {
        self.claude_dir().join("statusline-command.sh")
    }

    /// Write raw text to the settings document.
    pub fn write_settings(&self, content: &str) {
        fs::create_dir_all(self.claude_dir()).expect("Failed to create .claude directory");
        fs::write(self.settings_path(), content).expect("Failed to write settings");
    }

    pub fn read_json(&self, path: &Path) -> Value {
        let content = fs::read_to_string(path).expect("Failed to read JSON file");
        serde_json::from_str(&content).expect("File should contain valid JSON")
    }
}
