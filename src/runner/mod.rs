//! Bootstrap orchestration.

pub mod bootstrap;

pub use bootstrap::{AssetState, BootstrapOptions, BootstrapReport, Bootstrapper, Step};
