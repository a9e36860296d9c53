//! Sequential execution of the setup steps.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::python::{AcceleratorStatus, PythonEnv, PythonVersion};
use crate::steps::{
    absolutize, audit_packages, check_python_version, configure_paths, ensure_asset,
    probe_accelerator, provision_directories, AssetOutcome, AuditReport, ProvisionedDir,
    WorkspacePaths,
};
use crate::ui::{hints, UserInterface};

/// One stage of the bootstrap, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    VersionGate,
    Accelerator,
    Dependencies,
    Directories,
    Paths,
    Asset,
}

impl Step {
    /// Every step in the order it runs.
    pub const ALL: [Step; 6] = [
        Step::VersionGate,
        Step::Accelerator,
        Step::Dependencies,
        Step::Directories,
        Step::Paths,
        Step::Asset,
    ];

    /// Whether a failure of this step stops the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Step::Accelerator | Step::Asset)
    }

    fn title(&self) -> &'static str {
        match self {
            Step::VersionGate => "Checking Python version",
            Step::Accelerator => "Checking CUDA",
            Step::Dependencies => "Checking dependencies",
            Step::Directories => "Creating directories",
            Step::Paths => "Configuring project paths",
            Step::Asset => "Fetching pretrained model",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::VersionGate => "python version",
            Step::Accelerator => "accelerator",
            Step::Dependencies => "dependencies",
            Step::Directories => "directories",
            Step::Paths => "project paths",
            Step::Asset => "pretrained model",
        };
        write!(f, "{}", name)
    }
}

/// How the asset step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetState {
    /// The run stopped before the asset step.
    NotReached,
    /// `--skip_download` was given.
    Skipped,
    /// The file was already on disk.
    Present,
    /// The file was fetched.
    Downloaded { bytes: u64 },
    /// The download failed; the run still succeeds.
    Failed { message: String },
}

/// Locations and switches from the command line.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub workspace_dir: PathBuf,
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
    pub skip_download: bool,
    /// Directory relative paths are resolved against.
    pub cwd: PathBuf,
}

impl BootstrapOptions {
    /// Defaults matching the command-line flags, resolved against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            data_dir: PathBuf::from("./data"),
            save_dir: PathBuf::from("./output"),
            skip_download: false,
            cwd: cwd.into(),
        }
    }
}

/// What happened during a run.
#[derive(Debug)]
pub struct BootstrapReport {
    pub python: Option<PythonVersion>,
    pub accelerator: Option<AcceleratorStatus>,
    pub audit: Option<AuditReport>,
    pub directories: Vec<ProvisionedDir>,
    pub paths: Option<WorkspacePaths>,
    pub asset: AssetState,
    /// The fatal step that stopped the run, if any.
    pub failed_step: Option<Step>,
    pub duration: Duration,
}

impl BootstrapReport {
    fn new() -> Self {
        Self {
            python: None,
            accelerator: None,
            audit: None,
            directories: Vec::new(),
            paths: None,
            asset: AssetState::NotReached,
            failed_step: None,
            duration: Duration::ZERO,
        }
    }

    /// Whether every fatal step passed.
    pub fn success(&self) -> bool {
        self.failed_step.is_none()
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Runs the setup steps against a Python environment.
pub struct Bootstrapper<'a> {
    config: &'a SetupConfig,
    options: BootstrapOptions,
}

impl<'a> Bootstrapper<'a> {
    /// Create a new bootstrapper.
    pub fn new(config: &'a SetupConfig, options: BootstrapOptions) -> Self {
        Self { config, options }
    }

    /// Run every step in order, stopping at the first fatal failure.
    ///
    /// Failures are reported through `ui` and recorded in the returned
    /// report rather than returned as errors.
    pub fn run(&self, python: &dyn PythonEnv, ui: &mut dyn UserInterface) -> BootstrapReport {
        let start = Instant::now();
        let mut report = BootstrapReport::new();

        ui.show_header("Setting up the OSTrack environment");
        tracing::debug!(interpreter = python.executable(), "starting bootstrap");

        for step in Step::ALL {
            if step == Step::Asset && self.options.skip_download {
                tracing::debug!("asset download skipped");
                report.asset = AssetState::Skipped;
                continue;
            }

            ui.show_section(step.title());
            if let Err(e) = self.run_step(step, python, ui, &mut report) {
                tracing::debug!(step = %step, error = %e, "step failed");
                if step.is_fatal() {
                    report.failed_step = Some(step);
                    break;
                }
            }
        }

        report.duration = start.elapsed();

        match report.failed_step {
            Some(step) => {
                ui.error(&format!("Setup aborted: {} step failed", step));
            }
            None => {
                ui.success("OSTrack environment is ready");
                ui.show_section("Next steps");
                for (i, hint) in hints::next_steps().iter().enumerate() {
                    ui.show_hint(&format!("{}. {}", i + 1, hint));
                }
            }
        }

        tracing::debug!(
            success = report.success(),
            elapsed_ms = report.duration.as_millis() as u64,
            "bootstrap finished"
        );
        report
    }

    fn run_step(
        &self,
        step: Step,
        python: &dyn PythonEnv,
        ui: &mut dyn UserInterface,
        report: &mut BootstrapReport,
    ) -> Result<()> {
        let cwd = &self.options.cwd;

        match step {
            Step::VersionGate => {
                let version = check_python_version(python, &self.config.min_python, ui)?;
                report.python = Some(version);
            }
            Step::Accelerator => {
                report.accelerator = Some(probe_accelerator(python, ui));
            }
            Step::Dependencies => {
                let audit = audit_packages(python, &self.config.packages, ui);
                report.audit = Some(audit.clone());
                audit.into_result()?;
            }
            Step::Directories => {
                let workspace = absolutize(&self.options.workspace_dir, cwd);
                report.directories =
                    provision_directories(&workspace, &self.config.directories, ui)?;
            }
            Step::Paths => {
                let paths = WorkspacePaths::resolve(
                    &self.options.workspace_dir,
                    &self.options.data_dir,
                    &self.options.save_dir,
                    cwd,
                );
                let script = absolutize(&self.config.path_script, cwd);
                let result = configure_paths(python, &script, &paths, ui);
                report.paths = Some(paths);
                result?;
            }
            Step::Asset => {
                let workspace = absolutize(&self.options.workspace_dir, cwd);
                match ensure_asset(&workspace, &self.config.asset, ui) {
                    Ok(AssetOutcome::AlreadyPresent(_)) => report.asset = AssetState::Present,
                    Ok(AssetOutcome::Downloaded { bytes, .. }) => {
                        report.asset = AssetState::Downloaded { bytes }
                    }
                    Err(e) => {
                        report.asset = AssetState::Failed {
                            message: e.to_string(),
                        };
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }
}
