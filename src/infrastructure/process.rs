//! System Process Runner
//!
//! Spawns commands with `std::process`, streaming both pipes line by line
//! into the event sink while collecting them in arrival order.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{DeployEventSink, ProcessError, ProcessRunner, RunOptions};

/// Process runner backed by real child processes
pub struct SystemRunner {
    events: Arc<dyn DeployEventSink>,
}

impl SystemRunner {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], options: &RunOptions) -> Result<String, ProcessError> {
        let mut child = Command::new(program)
            .args(args)
            .current_dir(&options.working_dir)
            .envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let combined = Mutex::new(String::new());
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Both readers finish when the child closes its pipes; the scope joins them.
        std::thread::scope(|scope| {
            if let Some(out) = stdout {
                let combined = &combined;
                let events = &self.events;
                scope.spawn(move || pump(out, combined, options.echo.then_some(events.as_ref())));
            }
            if let Some(err) = stderr {
                let combined = &combined;
                let events = &self.events;
                scope.spawn(move || pump(err, combined, Some(events.as_ref())));
            }
        });

        let status = child.wait().map_err(|source| ProcessError::Spawn {
            program: program.to_string(),
            source,
        })?;

        let output = combined.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());

        if status.success() {
            Ok(output)
        } else {
            Err(ProcessError::Failed {
                program: program.to_string(),
                code: status.code(),
                output,
            })
        }
    }
}

fn pump(stream: impl Read, combined: &Mutex<String>, echo: Option<&dyn DeployEventSink>) {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if let Ok(mut all) = combined.lock() {
                    all.push_str(&line);
                }
                if let Some(events) = echo {
                    events.log(line.trim_end_matches(['\r', '\n']));
                }
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::infrastructure::events::MemoryEventSink;
    use tempfile::tempdir;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn success_returns_combined_output() {
        let dir = tempdir().unwrap();
        let sink = Arc::new(MemoryEventSink::new());
        let runner = SystemRunner::new(sink.clone());

        let out = runner
            .run("sh", &sh("echo out; echo err 1>&2"), &RunOptions::new(dir.path()))
            .unwrap();

        assert!(out.contains("out\n"));
        assert!(out.contains("err\n"));
        let mut lines = sink.lines();
        lines.sort();
        assert_eq!(lines, vec!["err", "out"]);
    }

    #[test]
    fn failure_carries_output_and_code() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(Arc::new(MemoryEventSink::new()));

        let err = runner
            .run("sh", &sh("echo '{\"result\":[]}'; exit 3"), &RunOptions::new(dir.path()))
            .unwrap_err();

        match err {
            ProcessError::Failed { code, output, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(output, "{\"result\":[]}\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn quiet_run_still_echoes_stderr() {
        let dir = tempdir().unwrap();
        let sink = Arc::new(MemoryEventSink::new());
        let runner = SystemRunner::new(sink.clone());

        runner
            .run("sh", &sh("echo adding: a.js; echo warn 1>&2"), &RunOptions::new(dir.path()).quiet())
            .unwrap();

        assert_eq!(sink.lines(), vec!["warn"]);
    }

    #[test]
    fn runs_in_working_dir_with_env() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let runner = SystemRunner::new(Arc::new(MemoryEventSink::new()));

        let out = runner
            .run(
                "sh",
                &sh("ls; echo \"$CODEPOINTE_TEST\""),
                &RunOptions::new(dir.path()).with_env("CODEPOINTE_TEST", "yes"),
            )
            .unwrap();

        assert!(out.contains("marker.txt"));
        assert!(out.contains("yes"));
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(Arc::new(MemoryEventSink::new()));

        let err = runner
            .run("codepointe-definitely-missing", &[], &RunOptions::new(dir.path()))
            .unwrap_err();

        assert!(matches!(err, ProcessError::Spawn { .. }));
        assert!(err.output().is_none());
    }
}
