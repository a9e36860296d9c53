//! Project path configuration.
//!
//! The tracking code reads its workspace, dataset and output locations from
//! generated local settings files. A helper script in the repository writes
//! them; this step resolves the three locations to absolute paths and runs
//! that helper once.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::python::PythonEnv;
use crate::ui::UserInterface;

/// The three locations handed to the path configurator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    pub workspace: PathBuf,
    pub data: PathBuf,
    pub save: PathBuf,
}

impl WorkspacePaths {
    /// Resolve user-supplied locations against `cwd`.
    pub fn resolve(workspace: &Path, data: &Path, save: &Path, cwd: &Path) -> Self {
        Self {
            workspace: absolutize(workspace, cwd),
            data: absolutize(data, cwd),
            save: absolutize(save, cwd),
        }
    }

    /// Arguments for the configurator script.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--workspace_dir".to_string(),
            self.workspace.display().to_string(),
            "--data_dir".to_string(),
            self.data.display().to_string(),
            "--save_dir".to_string(),
            self.save.display().to_string(),
        ]
    }
}

/// Make `path` absolute against `cwd` and drop `.`/`..` components.
///
/// Purely lexical: the path does not need to exist and symlinks are not
/// followed.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Run the configurator `script` once with the resolved `paths`.
///
/// A non-zero exit, or failure to start the interpreter, is fatal. The
/// helper's stderr is printed in full on failure; its stdout only in
/// verbose mode.
pub fn configure_paths(
    python: &dyn PythonEnv,
    script: &Path,
    paths: &WorkspacePaths,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Workspace: {}", paths.workspace.display()));
    ui.message(&format!("Data:      {}", paths.data.display()));
    ui.message(&format!("Output:    {}", paths.save.display()));

    let result = match python.run_script(script, &paths.to_args()) {
        Ok(result) => result,
        Err(e) => {
            let err = SetupError::PathConfiguration {
                message: e.to_string(),
            };
            ui.error(&err.to_string());
            return Err(err);
        }
    };

    ui.command_output(&result.stdout);

    if !result.success {
        let detail = result
            .stderr
            .trim()
            .lines()
            .last()
            .map(str::to_string)
            .unwrap_or_else(|| format!("exit code {:?}", result.exit_code));
        let err = SetupError::PathConfiguration {
            message: format!("{} exited with {:?}: {}", script.display(), result.exit_code, detail),
        };
        ui.error(&err.to_string());
        let stderr = result.stderr.trim_end();
        if !stderr.is_empty() {
            ui.error(stderr);
        }
        return Err(err);
    }

    ui.success("Project paths configured");
    Ok(())
}
