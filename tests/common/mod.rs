//! Common test utilities for CodePointe CLI tests.
//!
//! `TestEnv` is an isolated SFDX project plus an isolated home directory, so
//! no user config leaks into a run.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a CodePointe CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// NDJSON lines of stdout, parsed
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
            .collect()
    }

    /// Events with the given `event` tag
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .collect()
    }
}

pub struct TestEnv {
    project: TempDir,
    home: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Project directory with a `.sfdx` marker
    pub fn new() -> Self {
        let env = Self::bare();
        fs::create_dir_all(env.root.join(".sfdx")).unwrap();
        env
    }

    /// Project directory without the marker
    pub fn bare() -> Self {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let root = project.path().canonicalize().unwrap();
        Self {
            project,
            home,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Command for the binary, run from the project root with a private home
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_codepointe"));
        cmd.current_dir(&self.root)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("CODEPOINTE_CLI")
            .env_remove("CODEPOINTE_ZIP")
            .env_remove("CODEPOINTE_DEBOUNCE_MS");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (k, v) in env_vars {
            cmd.env(k, v);
        }
        let output = cmd.output().expect("failed to run codepointe");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Shell script standing in for an external tool. Each call appends
    /// its arguments to `<name>.log` in the home dir before running `body`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home.path().join(name);
        let log = self.home.path().join(format!("{name}.log"));
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Argument lines recorded by a fake tool
    pub fn tool_calls(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.home.path().join(format!("{name}.log")))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
