//! CUDA availability as seen by PyTorch.

/// Snippet run with `python -c` to ask torch about CUDA.
///
/// Prints a marker line (`missing`, `unavailable` or `available`), followed
/// by the device name and CUDA version when a device is present.
pub const PROBE_SCRIPT: &str = "\
import sys
try:
    import torch
except ImportError:
    print('missing')
    sys.exit(0)
if torch.cuda.is_available():
    print('available')
    print(torch.cuda.get_device_name(0))
    print(torch.version.cuda)
else:
    print('unavailable')
";

/// Outcome of the accelerator probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorStatus {
    /// torch imported and reported a CUDA device.
    Available {
        /// Name of device 0.
        device: String,
        /// CUDA runtime version torch was built against.
        cuda_version: Option<String>,
    },

    /// torch imported but no CUDA device is usable.
    NoDevice,

    /// torch is not installed.
    LibraryMissing,

    /// The probe itself could not run or produced unexpected output.
    ProbeFailed { message: String },
}

impl AcceleratorStatus {
    /// Whether GPU acceleration can be used.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Interpret the stdout of [`PROBE_SCRIPT`].
    ///
    /// Lines before the marker are ignored since some torch builds print
    /// warnings on import.
    pub fn from_probe_output(stdout: &str) -> Option<Self> {
        let mut lines = stdout
            .lines()
            .map(str::trim)
            .skip_while(|l| !matches!(*l, "missing" | "unavailable" | "available"));

        match lines.next()? {
            "missing" => Some(Self::LibraryMissing),
            "unavailable" => Some(Self::NoDevice),
            _ => {
                let device = lines
                    .next()
                    .filter(|l| !l.is_empty())
                    .unwrap_or("unknown device")
                    .to_string();
                let cuda_version = lines
                    .next()
                    .filter(|l| !l.is_empty() && *l != "None")
                    .map(String::from);
                Some(Self::Available {
                    device,
                    cuda_version,
                })
            }
        }
    }
}
