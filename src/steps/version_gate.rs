//! Minimum interpreter version check.

use crate::error::{Result, SetupError};
use crate::python::{PythonEnv, PythonVersion};
use crate::ui::{hints, UserInterface};

/// Verify the interpreter is at least `minimum`.
///
/// Prints the outcome either way. An interpreter that cannot be run counts
/// as a failure.
pub fn check_python_version(
    python: &dyn PythonEnv,
    minimum: &PythonVersion,
    ui: &mut dyn UserInterface,
) -> Result<PythonVersion> {
    let version = match python.version() {
        Ok(version) => version,
        Err(e) => {
            ui.error(&e.to_string());
            ui.show_hint(hints::choose_python());
            return Err(e);
        }
    };

    if !version.meets(minimum) {
        let err = SetupError::UnsupportedPython {
            found: version.to_string(),
            required: minimum.to_string(),
        };
        ui.error(&err.to_string());
        ui.show_hint(hints::choose_python());
        return Err(err);
    }

    ui.success(&format!(
        "Python {} ({} or newer required)",
        version, minimum
    ));
    Ok(version)
}
