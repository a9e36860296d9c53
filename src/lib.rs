//! Trackstrap - OSTrack environment bootstrapper.
//!
//! Trackstrap prepares a machine to train and evaluate the OSTrack visual
//! object tracker. It checks the Python interpreter version, probes CUDA
//! through PyTorch, verifies that the required packages import, creates the
//! workspace directory tree, runs the project's path configuration helper,
//! and downloads the pretrained backbone weights.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `trackstrap.yml` and built-in defaults
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP downloads
//! - [`python`] - Interpreter probing behind the [`python::PythonEnv`] trait
//! - [`runner`] - Step ordering and the run report
//! - [`shell`] - External command execution
//! - [`steps`] - The individual setup steps
//! - [`ui`] - Spinners, themes and terminal output
//!
//! # Example
//!
//! ```
//! use trackstrap::config::SetupConfig;
//! use trackstrap::python::FakePython;
//! use trackstrap::runner::{BootstrapOptions, Bootstrapper};
//! use trackstrap::ui::MockUI;
//!
//! let workspace = tempfile::tempdir().unwrap();
//! let config = SetupConfig::default();
//! let options = BootstrapOptions {
//!     skip_download: true,
//!     ..BootstrapOptions::new(workspace.path())
//! };
//!
//! let mut ui = MockUI::new();
//! let report = Bootstrapper::new(&config, options).run(&FakePython::new(), &mut ui);
//! assert_eq!(report.exit_code(), 0);
//! assert!(workspace.path().join("data/got10k/train").is_dir());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod python;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};
