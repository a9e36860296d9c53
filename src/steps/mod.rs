//! The individual bootstrap steps.
//!
//! Each step prints its own status lines through a [`UserInterface`] and
//! returns a typed outcome. Whether a failure halts the run is decided by
//! the driver in [`crate::runner`].
//!
//! [`UserInterface`]: crate::ui::UserInterface

pub mod accelerator;
pub mod asset;
pub mod dependencies;
pub mod directories;
pub mod paths;
pub mod version_gate;

pub use accelerator::probe_accelerator;
pub use asset::{ensure_asset, fetch_asset, AssetOutcome};
pub use dependencies::{audit_packages, AuditReport};
pub use directories::{provision_directories, ProvisionedDir};
pub use paths::{absolutize, configure_paths, WorkspacePaths};
pub use version_gate::check_python_version;
