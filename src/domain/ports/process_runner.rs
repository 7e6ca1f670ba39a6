//! Process Runner Port
//!
//! Launches external commands (zip, the deploy CLI, hook commands) and
//! returns their combined output.

use std::path::PathBuf;

use thiserror::Error;

/// Options for one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Working directory of the child
    pub working_dir: PathBuf,
    /// Echo stdout lines to the log (stderr is always echoed)
    pub echo: bool,
    /// Extra environment variables
    pub env: Vec<(String, String)>,
}

impl RunOptions {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            echo: true,
            env: Vec::new(),
        }
    }

    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Failure of an external command
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited non-zero (or was killed)
    #[error("'{program}' exited with {}", exit_label(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        /// Combined stdout and stderr
        output: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

impl ProcessError {
    /// Captured output of a failed run, if it got that far
    pub fn output(&self) -> Option<&str> {
        match self {
            ProcessError::Failed { output, .. } => Some(output),
            ProcessError::Spawn { .. } => None,
        }
    }
}

/// Runs external commands
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args`, resolving to combined stdout+stderr on exit 0
    fn run(&self, program: &str, args: &[String], options: &RunOptions) -> Result<String, ProcessError>;
}
