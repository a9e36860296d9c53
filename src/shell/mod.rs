//! Process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{describe, execute_quiet, CommandResult};
pub use platform::{default_python, is_ci};
