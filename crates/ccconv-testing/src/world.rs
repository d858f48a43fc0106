//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use chrono::{DateTime, Utc};
use filetime::FileTime;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a data dir (`.ccconv`) and a log root
/// (`.claude/projects`) inside a fresh temp dir.
///
/// # Example
/// ```no_run
/// use ccconv_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new();
/// world
///     .write_log("-Users-me-app", "s.jsonl", &[fixtures::user_message("hi")])
///     .unwrap();
///
/// let result = world.run(&["raws", "--since=all"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    log_root: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".ccconv");
        let log_root = temp_dir.path().join(".claude").join("projects");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&log_root).expect("Failed to create log root");

        Self {
            temp_dir,
            data_dir,
            log_root,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_root(&self) -> &Path {
        &self.log_root
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data dir.
    pub fn with_config(self, contents: &str) -> Self {
        fs::write(self.data_dir.join("config.toml"), contents).expect("Failed to write config");
        self
    }

    /// Write records as JSONL into `<log_root>/<project>/<file>`.
    pub fn write_log(&self, project: &str, file: &str, records: &[Value]) -> Result<PathBuf> {
        let body: String = records
            .iter()
            .map(|record| format!("{}\n", record))
            .collect();
        self.write_raw_log(project, file, &body)
    }

    /// Write arbitrary text, for malformed-line cases.
    pub fn write_raw_log(&self, project: &str, file: &str, body: &str) -> Result<PathBuf> {
        let dir = self.log_root.join(project);
        fs::create_dir_all(&dir)?;
        let path = dir.join(file);
        fs::write(&path, body)?;
        Ok(path)
    }

    /// Backdate (or postdate) a file's modification time.
    pub fn set_modified(&self, path: &Path, at: DateTime<Utc>) -> Result<()> {
        let mtime = FileTime::from_unix_time(at.timestamp(), 0);
        filetime::set_file_mtime(path, mtime)?;
        Ok(())
    }

    /// Point a command at this world's directories.
    ///
    /// Inherited `CCCONV_*` and `RUST_LOG` variables are cleared so the host
    /// environment cannot leak into a test.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--log-root")
            .arg(&self.log_root)
            .current_dir(self.temp_dir.path())
            .env_remove("CCCONV_PATH")
            .env_remove("CCCONV_LOG_ROOT")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `ccconv` binary configured for this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("ccconv")
            .map_err(|e| anyhow::anyhow!("Failed to find ccconv binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        Ok(CliResult::from(cmd.output()?))
    }

    /// Run without `--data-dir`/`--log-root`, relying on env vars only.
    #[allow(deprecated)]
    pub fn run_bare(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("ccconv")
            .map_err(|e| anyhow::anyhow!("Failed to find ccconv binary: {}", e))?;

        cmd.current_dir(self.temp_dir.path())
            .env_remove("CCCONV_PATH")
            .env_remove("CCCONV_LOG_ROOT")
            .env_remove("RUST_LOG")
            .env("HOME", self.temp_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd.args(args);

        Ok(CliResult::from(cmd.output()?))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for CliResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
