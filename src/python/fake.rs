//! Scripted Python environment for tests.
//!
//! # Example
//!
//! ```
//! use trackstrap::python::{FakePython, PythonEnv, PythonVersion};
//!
//! let python = FakePython::new()
//!     .with_version(PythonVersion::with_patch(3, 7, 9))
//!     .with_missing(&["wandb"]);
//!
//! assert_eq!(python.version().unwrap().minor, 7);
//! assert!(!python.can_import("wandb"));
//! assert!(python.can_import("numpy"));
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{AcceleratorStatus, PythonEnv, PythonVersion};
use crate::error::{Result, SetupError};
use crate::shell::CommandResult;

#[derive(Debug, Clone)]
enum ScriptBehavior {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    SpawnError(String),
}

/// [`PythonEnv`] whose answers are configured up front.
///
/// Defaults to Python 3.10.12 with every module importable, no CUDA device,
/// and scripts that exit 0.
#[derive(Debug)]
pub struct FakePython {
    version: Option<PythonVersion>,
    missing: HashSet<String>,
    accelerator: AcceleratorStatus,
    script: ScriptBehavior,
    imports: RefCell<Vec<String>>,
    script_calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl Default for FakePython {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePython {
    /// Create a fake that satisfies every check.
    pub fn new() -> Self {
        Self {
            version: Some(PythonVersion::with_patch(3, 10, 12)),
            missing: HashSet::new(),
            accelerator: AcceleratorStatus::NoDevice,
            script: ScriptBehavior::Exit {
                code: 0,
                stdout: String::new(),
                stderr: String::new(),
            },
            imports: RefCell::new(Vec::new()),
            script_calls: RefCell::new(Vec::new()),
        }
    }

    /// Report this version.
    pub fn with_version(mut self, version: PythonVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Behave like an interpreter that cannot be started.
    pub fn without_interpreter(mut self) -> Self {
        self.version = None;
        self
    }

    /// Make these modules fail to import.
    pub fn with_missing(mut self, modules: &[&str]) -> Self {
        self.missing.extend(modules.iter().map(|m| m.to_string()));
        self
    }

    /// Report this accelerator status.
    pub fn with_accelerator(mut self, status: AcceleratorStatus) -> Self {
        self.accelerator = status;
        self
    }

    /// Make scripts print `stdout` and exit 0.
    pub fn with_script_output(mut self, stdout: &str) -> Self {
        self.script = ScriptBehavior::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        };
        self
    }

    /// Make scripts exit with `code` after writing `stderr`.
    pub fn with_script_failure(mut self, code: i32, stderr: &str) -> Self {
        self.script = ScriptBehavior::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        };
        self
    }

    /// Make scripts fail to start.
    pub fn with_script_spawn_error(mut self, message: &str) -> Self {
        self.script = ScriptBehavior::SpawnError(message.to_string());
        self
    }

    /// Modules whose import was attempted, in order.
    pub fn imports(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }

    /// Scripts that were run, with their arguments.
    pub fn script_calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.script_calls.borrow().clone()
    }
}

impl PythonEnv for FakePython {
    fn executable(&self) -> &str {
        "fake-python"
    }

    fn version(&self) -> Result<PythonVersion> {
        self.version
            .ok_or_else(|| SetupError::InterpreterUnavailable {
                interpreter: self.executable().to_string(),
                message: "not installed".to_string(),
            })
    }

    fn can_import(&self, module: &str) -> bool {
        self.imports.borrow_mut().push(module.to_string());
        !self.missing.contains(module)
    }

    fn probe_accelerator(&self) -> AcceleratorStatus {
        self.accelerator.clone()
    }

    fn run_script(&self, script: &Path, args: &[String]) -> Result<CommandResult> {
        self.script_calls
            .borrow_mut()
            .push((script.to_path_buf(), args.to_vec()));

        match &self.script {
            ScriptBehavior::Exit {
                code,
                stdout,
                stderr,
            } => {
                let duration = Duration::from_millis(1);
                if *code == 0 {
                    Ok(CommandResult::success(
                        stdout.clone(),
                        stderr.clone(),
                        duration,
                    ))
                } else {
                    Ok(CommandResult::failure(
                        Some(*code),
                        stdout.clone(),
                        stderr.clone(),
                        duration,
                    ))
                }
            }
            ScriptBehavior::SpawnError(message) => Err(SetupError::SpawnFailed {
                command: format!("{} {}", self.executable(), script.display()),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message.clone()),
            }),
        }
    }
}
