//! Error types for trackstrap operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each bootstrap step reports its failure as a `SetupError` variant
//! - The driver decides which variants halt the run
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for trackstrap operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The interpreter could not be run or its version could not be read.
    #[error("Python interpreter '{interpreter}' is not usable: {message}")]
    InterpreterUnavailable {
        interpreter: String,
        message: String,
    },

    /// The interpreter is older than the supported minimum.
    #[error("Python {required} or newer is required (found {found})")]
    UnsupportedPython { found: String, required: String },

    /// One or more required packages cannot be imported.
    #[error("Missing packages: {}", .packages.join(", "))]
    MissingPackages { packages: Vec<String> },

    /// A workspace directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path configuration helper failed.
    #[error("Path configuration failed: {message}")]
    PathConfiguration { message: String },

    /// The pretrained model could not be downloaded.
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// External command could not be started.
    #[error("Failed to start `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for trackstrap operations.
pub type Result<T> = std::result::Result<T, SetupError>;
