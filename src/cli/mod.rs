//! Command-line interface for trackstrap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Loads configuration and drives the bootstrapper

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::RunCommand;
