//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `noteboard` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NoteboardCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl NoteboardCommand {
    /// Creates a new command for the `noteboard` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Points the default config lookup at `path` so the user's real config
    /// file never leaks into a test.
    pub fn config_home(mut self, path: &Path) -> Self {
        let value = path.to_string_lossy().to_string();
        self.envs.push(("XDG_CONFIG_HOME".to_string(), value.clone()));
        self.envs.push(("HOME".to_string(), value));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `text` to the command's stdin.
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("noteboard").expect("Failed to find noteboard binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `show` command.
    pub fn show(self) -> Self {
        self.args(["show"])
    }

    /// Configures for the `run` command reading a script file.
    pub fn run_script(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args(["run".to_string(), path])
    }

    /// Configures for the `run` command reading stdin.
    pub fn run_stdin(self, script: &str) -> Self {
        self.args(["run"]).stdin(script)
    }

    /// Configures for the `colors` command.
    pub fn colors(self) -> Self {
        self.args(["colors"])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format human` to the command.
    pub fn format_human(self) -> Self {
        self.args(["--format", "human"])
    }

    /// Adds `--each` to the command.
    pub fn each(self) -> Self {
        self.args(["--each"])
    }

    /// Adds `--empty` to the command.
    pub fn empty(self) -> Self {
        self.args(["--empty"])
    }

    /// Adds `-v` to the command.
    pub fn verbose(self) -> Self {
        self.args(["-v"])
    }
}

impl Default for NoteboardCommand {
    fn default() -> Self {
        Self::new()
    }
}
