//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::NoteboardCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary directory.
///
/// The directory doubles as the config home for spawned commands and as a
/// place to write intent scripts. It is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the root of the environment.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns where the default config file lives inside this environment.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("noteboard").join("config.toml")
    }

    /// Writes the default config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config dir");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes an intent script from lines and returns its path.
    pub fn write_script(&self, name: &str, lines: &[&str]) -> PathBuf {
        self.write_file(name, &format!("{}\n", lines.join("\n")))
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NoteboardCommand configured for this test environment.
    pub fn cmd(&self) -> NoteboardCommand {
        NoteboardCommand::new().config_home(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
