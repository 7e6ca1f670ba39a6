//! Deploy pipelines
//!
//! Two pipelines consume a [`DeployBatch`]:
//!
//! - `run`: zip staged bundles, then `force:source:deploy` the staged files.
//!   Failures are translated into per-file diagnostics when the CLI output
//!   parses.
//! - `compile_project`: zip every bundle, convert `src/` with
//!   `force:mdapi:convert`, deploy the converted tree.
//!
//! Every step is awaited in order and the first failure aborts the rest.
//! Failures stop at this boundary: they are logged, announced as a
//! `Failed` event and returned, never retried. Artifacts written before the
//! failure (zipped bundles) stay in place.


use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::application::scheduler::Flush;
use crate::config::DeployConfig;
use crate::domain::batch::{DeployBatch, RESOURCE_BUNDLES_DIR};
use crate::domain::diagnostics::{group_by_file, parse_deploy_failure};
use crate::domain::hooks::HookName;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, DiagnosticSink, FlushKind, HookError, HookSource, ProcessError,
    ProcessRunner, RunOptions,
};

const SEPARATOR: &str = "======================================================================";

/// Why a pipeline stopped
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("zipping bundle '{bundle}' failed: {source}")]
    Zip {
        bundle: String,
        #[source]
        source: ProcessError,
    },

    #[error("deploy failed: {0}")]
    Deploy(#[source] ProcessError),

    #[error("convert failed: {0}")]
    Convert(#[source] ProcessError),

    #[error(transparent)]
    Hook(#[from] HookError),

    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// External tools the pipelines call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub cli: String,
    pub zip: String,
    /// Project-relative conversion output directory
    pub convert_dir: PathBuf,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from(&DeployConfig::default())
    }
}

impl From<&DeployConfig> for PipelineSettings {
    fn from(config: &DeployConfig) -> Self {
        Self {
            cli: config.cli.clone(),
            zip: config.zip.clone(),
            convert_dir: config.convert_dir.clone(),
        }
    }
}

/// Runs deploy batches against the external tools
pub struct DeployPipeline {
    runner: Arc<dyn ProcessRunner>,
    hooks: Arc<dyn HookSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
    events: Arc<dyn DeployEventSink>,
    settings: PipelineSettings,
}

impl DeployPipeline {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        hooks: Arc<dyn HookSource>,
        diagnostics: Arc<dyn DiagnosticSink>,
        events: Arc<dyn DeployEventSink>,
    ) -> Self {
        Self {
            runner,
            hooks,
            diagnostics,
            events,
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run a batch handed over by the scheduler
    pub fn flush(&self, flush: Flush) -> Result<(), PipelineError> {
        let kind = flush.kind();
        self.events.log(SEPARATOR);
        self.events.on_event(DeployEvent::FlushStarted {
            root: flush.batch().root().to_path_buf(),
            kind,
        });

        match flush {
            Flush::Deploy(batch) => {
                self.events.log("deploying files");
                self.run(batch)
            }
            Flush::CompileProject(batch) => {
                self.events.log("compiling project");
                self.compile_project(batch)
            }
        }
    }

    /// Zip staged bundles and deploy staged files
    pub fn run(&self, batch: DeployBatch) -> Result<(), PipelineError> {
        match self.try_run(&batch) {
            Ok(()) => {
                self.events.log("deploy complete");
                self.events.on_event(DeployEvent::Completed {
                    root: batch.root().to_path_buf(),
                    kind: FlushKind::Deploy,
                });
                Ok(())
            }
            Err(err) => {
                let message = format!("failed to deploy: {}", batch.joined_files());
                self.events.log(&message);
                self.events.log(&err.to_string());
                self.events.on_event(DeployEvent::Failed {
                    root: batch.root().to_path_buf(),
                    kind: FlushKind::Deploy,
                    message,
                });
                self.report_failure(batch.root(), &err);
                Err(err)
            }
        }
    }

    fn try_run(&self, batch: &DeployBatch) -> Result<(), PipelineError> {
        self.diagnostics.clear(batch.root());

        self.zip_bundles(batch)?;

        self.run_hook(HookName::BeforeDeployFiles, batch)?;

        let files = batch.joined_files();
        let args = vec![
            "force:source:deploy".to_string(),
            "--json".to_string(),
            "-p".to_string(),
            files.clone(),
        ];
        self.with_progress(format!("deploying: {files}"), || {
            self.runner
                .run(&self.settings.cli, &args, &RunOptions::new(batch.root()))
                .map_err(PipelineError::Deploy)
        })?;

        self.run_hook(HookName::AfterDeployFiles, batch)?;

        Ok(())
    }

    /// Convert and deploy the whole project. Every bundle directory found is
    /// staged into `batch` first.
    pub fn compile_project(&self, mut batch: DeployBatch) -> Result<(), PipelineError> {
        match self.try_compile_project(&mut batch) {
            Ok(()) => {
                self.events.log("project compile complete");
                self.events.on_event(DeployEvent::Completed {
                    root: batch.root().to_path_buf(),
                    kind: FlushKind::CompileProject,
                });
                Ok(())
            }
            Err(err) => {
                let message = "project compile failed".to_string();
                self.events.log(&message);
                self.events.log(&err.to_string());
                self.events.on_event(DeployEvent::Failed {
                    root: batch.root().to_path_buf(),
                    kind: FlushKind::CompileProject,
                    message,
                });
                Err(err)
            }
        }
    }

    fn try_compile_project(&self, batch: &mut DeployBatch) -> Result<(), PipelineError> {
        self.diagnostics.clear(batch.root());

        for bundle in discover_bundles(batch.root())? {
            batch.add_bundle(bundle);
        }

        self.zip_bundles(batch)?;

        let convert_dir = batch.root().join(&self.settings.convert_dir);
        remove_dir_if_present(&convert_dir)?;

        self.run_hook(HookName::BeforeProjectCompile, batch)?;

        let convert_arg = self.settings.convert_dir.to_string_lossy().to_string();
        let convert_args = vec![
            "force:mdapi:convert".to_string(),
            "--rootdir".to_string(),
            "src".to_string(),
            "--outputdir".to_string(),
            convert_arg.clone(),
        ];
        self.runner
            .run(&self.settings.cli, &convert_args, &RunOptions::new(batch.root()))
            .map_err(PipelineError::Convert)?;

        let deploy_args = vec![
            "force:source:deploy".to_string(),
            "-p".to_string(),
            convert_arg,
        ];
        self.with_progress("deploying project".to_string(), || {
            self.runner
                .run(&self.settings.cli, &deploy_args, &RunOptions::new(batch.root()))
                .map_err(PipelineError::Deploy)
        })?;

        remove_dir_if_present(&convert_dir)?;

        self.run_hook(HookName::AfterProjectCompile, batch)?;

        Ok(())
    }

    fn zip_bundles(&self, batch: &DeployBatch) -> Result<(), PipelineError> {
        self.run_hook(HookName::BeforeZipBundle, batch)?;

        if batch.bundle_count() > 0 {
            let out_dir = batch.static_resources_dir();
            std::fs::create_dir_all(&out_dir).map_err(|source| PipelineError::Io {
                action: "failed to create",
                path: out_dir.clone(),
                source,
            })?;
        }

        for bundle in batch.bundles() {
            let args = vec![
                "-FSr".to_string(),
                batch.bundle_archive_path(bundle).to_string_lossy().to_string(),
                ".".to_string(),
            ];
            let options = RunOptions::new(batch.bundle_source_dir(bundle)).quiet();
            self.runner
                .run(&self.settings.zip, &args, &options)
                .map_err(|source| PipelineError::Zip {
                    bundle: bundle.to_string(),
                    source,
                })?;
        }

        self.run_hook(HookName::AfterZipBundle, batch)
    }

    fn run_hook(&self, name: HookName, batch: &DeployBatch) -> Result<(), PipelineError> {
        let hooks = self.hooks.load(batch.root())?;

        let Some((program, args)) = hooks.get(name).and_then(|c| c.program_and_args()) else {
            return Ok(());
        };

        let state = serde_json::to_string(batch).unwrap_or_else(|_| "{}".to_string());
        let options = RunOptions::new(batch.root())
            .with_env("CODEPOINTE_HOOK", name.as_str())
            .with_env("CODEPOINTE_ROOT", batch.root().to_string_lossy())
            .with_env("CODEPOINTE_BUNDLES", batch.bundles().collect::<Vec<_>>().join(","))
            .with_env("CODEPOINTE_FILES", batch.joined_files())
            .with_env("CODEPOINTE_STATE", state);

        self.runner
            .run(&program, &args, &options)
            .map(|_| ())
            .map_err(|source| HookError::Failed { hook: name, source }.into())
    }

    fn with_progress<T>(
        &self,
        title: String,
        step: impl FnOnce() -> Result<T, PipelineError>,
    ) -> Result<T, PipelineError> {
        self.events.on_event(DeployEvent::ProgressStarted {
            title: title.clone(),
        });
        let result = step();
        self.events.on_event(DeployEvent::ProgressFinished {
            title,
            success: result.is_ok(),
        });
        result
    }

    /// Only the deploy CLI reports structured problems. Zip runs quietly, so
    /// its captured output is logged here; other steps echoed theirs already.
    fn report_failure(&self, root: &Path, err: &PipelineError) {
        match err {
            PipelineError::Deploy(source) => {
                if let Some(payload) = source.output() {
                    self.publish_diagnostics(root, payload);
                }
            }
            PipelineError::Zip { source, .. } => {
                if let Some(output) = source.output() {
                    for line in output.lines() {
                        self.events.log(line);
                    }
                }
            }
            PipelineError::Convert(_) | PipelineError::Hook(_) | PipelineError::Io { .. } => {}
        }
    }

    /// Best effort: a payload that does not parse is logged, never fatal.
    fn publish_diagnostics(&self, root: &Path, payload: &str) {
        match parse_deploy_failure(payload) {
            Ok(diagnostics) => {
                for (file, diagnostics) in group_by_file(diagnostics) {
                    self.diagnostics.set(&root.join(file), diagnostics);
                }
            }
            Err(parse_err) => {
                self.events.on_event(DeployEvent::Warning {
                    message: format!("could not parse deploy output: {parse_err}"),
                });
                self.events.log(payload);
            }
        }
    }
}

/// Bundle directories under `resource-bundles/`, hidden entries skipped.
/// A missing directory has no bundles.
pub fn discover_bundles(root: &Path) -> Result<Vec<String>, PipelineError> {
    let dir = root.join(RESOURCE_BUNDLES_DIR);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PipelineError::Io {
                action: "failed to read",
                path: dir,
                source,
            })
        }
    };

    let mut bundles: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect();
    bundles.sort();
    Ok(bundles)
}

fn remove_dir_if_present(dir: &Path) -> Result<(), PipelineError> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(PipelineError::Io {
            action: "failed to remove",
            path: dir.to_path_buf(),
            source,
        }),
    }
}
