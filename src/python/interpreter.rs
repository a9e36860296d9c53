//! A Python interpreter reached by spawning it.

use std::ffi::OsString;
use std::path::Path;

use super::{AcceleratorStatus, PythonEnv, PythonVersion};
use crate::error::{Result, SetupError};
use crate::shell::{execute_quiet, CommandResult};

/// [`PythonEnv`] backed by an interpreter executable on this machine.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    executable: String,
}

impl PythonInterpreter {
    /// Use the given interpreter name (looked up on PATH) or path.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn unavailable(&self, message: impl Into<String>) -> SetupError {
        SetupError::InterpreterUnavailable {
            interpreter: self.executable.clone(),
            message: message.into(),
        }
    }
}

impl PythonEnv for PythonInterpreter {
    fn executable(&self) -> &str {
        &self.executable
    }

    fn version(&self) -> Result<PythonVersion> {
        let result = execute_quiet(&self.executable, &["--version"], None)
            .map_err(|e| self.unavailable(e.to_string()))?;

        if !result.success {
            return Err(self.unavailable(format!(
                "`{} --version` exited with code {:?}",
                self.executable, result.exit_code
            )));
        }

        let output = result.combined_output();
        PythonVersion::from_version_output(&output).ok_or_else(|| {
            self.unavailable(format!(
                "unrecognised version output: {}",
                output.trim()
            ))
        })
    }

    fn can_import(&self, module: &str) -> bool {
        let code = format!("import {}", module);
        match execute_quiet(&self.executable, &["-c", code.as_str()], None) {
            Ok(result) => {
                if !result.success {
                    tracing::debug!("import {} failed: {}", module, result.stderr.trim());
                }
                result.success
            }
            Err(e) => {
                tracing::debug!("import probe for {} could not run: {}", module, e);
                false
            }
        }
    }

    fn probe_accelerator(&self) -> AcceleratorStatus {
        let result = match execute_quiet(
            &self.executable,
            &["-c", super::accelerator::PROBE_SCRIPT],
            None,
        ) {
            Ok(result) => result,
            Err(e) => {
                return AcceleratorStatus::ProbeFailed {
                    message: e.to_string(),
                }
            }
        };

        if !result.success {
            let stderr = result.stderr.trim();
            let last_line = stderr.lines().last().unwrap_or("probe exited abnormally");
            return AcceleratorStatus::ProbeFailed {
                message: last_line.to_string(),
            };
        }

        AcceleratorStatus::from_probe_output(&result.stdout).unwrap_or_else(|| {
            AcceleratorStatus::ProbeFailed {
                message: format!("unexpected probe output: {}", result.stdout.trim()),
            }
        })
    }

    fn run_script(&self, script: &Path, args: &[String]) -> Result<CommandResult> {
        let mut argv: Vec<OsString> = Vec::with_capacity(args.len() + 1);
        argv.push(script.as_os_str().to_os_string());
        argv.extend(args.iter().map(OsString::from));
        execute_quiet(&self.executable, &argv, None)
    }
}
