//! The bootstrap command.

use std::path::{Path, PathBuf};

use crate::config::{load_config, SetupConfig};
use crate::error::Result;
use crate::python::{PythonEnv, PythonInterpreter};
use crate::runner::{BootstrapOptions, BootstrapReport, Bootstrapper};
use crate::ui::UserInterface;

use super::args::Cli;

/// Loads configuration and runs the bootstrapper for a parsed command line.
pub struct RunCommand<'a> {
    cwd: PathBuf,
    cli: &'a Cli,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command resolving paths against `cwd`.
    pub fn new(cwd: &Path, cli: &'a Cli) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            cli,
        }
    }

    fn options(&self) -> BootstrapOptions {
        BootstrapOptions {
            workspace_dir: self.cli.workspace_dir.clone(),
            data_dir: self.cli.data_dir.clone(),
            save_dir: self.cli.save_dir.clone(),
            skip_download: self.cli.skip_download,
            cwd: self.cwd.clone(),
        }
    }

    /// Run against the interpreter chosen by flags, config or platform.
    ///
    /// Only configuration problems are returned as errors; step failures
    /// are part of the report.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<BootstrapReport> {
        let config = load_config(&self.cwd, self.cli.config.as_deref())?;
        let python = PythonInterpreter::new(self.cli.resolve_python(config.python.as_deref()));
        tracing::debug!("Using interpreter {}", python.executable());
        Ok(self.execute_with(&config, &python, ui))
    }

    /// Run against a specific Python environment.
    pub fn execute_with(
        &self,
        config: &SetupConfig,
        python: &dyn PythonEnv,
        ui: &mut dyn UserInterface,
    ) -> BootstrapReport {
        Bootstrapper::new(config, self.options()).run(python, ui)
    }
}
