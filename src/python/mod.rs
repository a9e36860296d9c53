//! Python interpreter probing.
//!
//! Everything the bootstrapper needs to know about the interpreter goes
//! through the [`PythonEnv`] trait so that steps can be tested without a
//! real Python installation.
//!
//! # Modules
//!
//! - [`accelerator`] - CUDA probe script and its result type
//! - [`fake`] - [`FakePython`], a scripted environment for tests
//! - [`interpreter`] - [`PythonInterpreter`], which spawns a real interpreter
//! - [`version`] - Version parsing and the minimum-version comparison

pub mod accelerator;
pub mod fake;
pub mod interpreter;
pub mod version;

pub use accelerator::AcceleratorStatus;
pub use fake::FakePython;
pub use interpreter::PythonInterpreter;
pub use version::{PythonVersion, MINIMUM_PYTHON};

use std::path::Path;

use crate::error::Result;
use crate::shell::CommandResult;

/// Capability probe over a Python environment.
pub trait PythonEnv {
    /// Interpreter name or path as given by the user.
    fn executable(&self) -> &str;

    /// Report the interpreter version.
    fn version(&self) -> Result<PythonVersion>;

    /// Whether `import <module>` succeeds.
    fn can_import(&self, module: &str) -> bool;

    /// Ask torch whether a CUDA device is usable.
    fn probe_accelerator(&self) -> AcceleratorStatus;

    /// Run a script file with arguments, capturing its output.
    fn run_script(&self, script: &Path, args: &[String]) -> Result<CommandResult>;
}
