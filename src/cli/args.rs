//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::shell::default_python;
use crate::ui::OutputMode;

/// Trackstrap - OSTrack environment setup.
///
/// Checks the Python interpreter and its packages, creates the workspace
/// directory tree, configures project paths and fetches the pretrained
/// backbone weights.
#[derive(Debug, Parser)]
#[command(name = "trackstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root for created directories and project paths
    #[arg(long = "workspace_dir", value_name = "DIR", default_value = ".")]
    pub workspace_dir: PathBuf,

    /// Dataset root handed to the path configurator
    #[arg(long = "data_dir", value_name = "DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Output root handed to the path configurator
    #[arg(long = "save_dir", value_name = "DIR", default_value = "./output")]
    pub save_dir: PathBuf,

    /// Don't download the pretrained model
    #[arg(long = "skip_download")]
    pub skip_download: bool,

    /// Python interpreter to check (overrides the config file)
    #[arg(long, value_name = "EXE", env = "TRACKSTRAP_PYTHON")]
    pub python: Option<String>,

    /// Path to config file (overrides ./trackstrap.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by `--verbose`/`--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }

    /// Interpreter to use: `--python`, then the config file, then the
    /// platform default.
    pub fn resolve_python(&self, configured: Option<&str>) -> String {
        self.python
            .clone()
            .or_else(|| configured.map(String::from))
            .unwrap_or_else(|| default_python().to_string())
    }
}
