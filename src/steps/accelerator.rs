//! Optional CUDA detection.

use crate::python::{AcceleratorStatus, PythonEnv};
use crate::ui::UserInterface;

/// Probe for a CUDA device through torch.
///
/// Never fails; anything other than an available device is reported as a
/// warning and the run continues on CPU.
pub fn probe_accelerator(python: &dyn PythonEnv, ui: &mut dyn UserInterface) -> AcceleratorStatus {
    let status = python.probe_accelerator();

    let reason = match &status {
        AcceleratorStatus::Available {
            device,
            cuda_version,
        } => {
            ui.success(&format!("CUDA available: {}", device));
            if let Some(version) = cuda_version {
                ui.message(&format!("  CUDA version: {}", version));
            }
            return status;
        }
        AcceleratorStatus::NoDevice => "no CUDA device detected".to_string(),
        AcceleratorStatus::LibraryMissing => "PyTorch is not installed".to_string(),
        AcceleratorStatus::ProbeFailed { message } => format!("probe failed: {}", message),
    };

    tracing::debug!("Accelerator probe result: {:?}", status);
    ui.warning(&format!(
        "CUDA not available ({}); continuing in CPU-only mode",
        reason
    ));
    status
}
