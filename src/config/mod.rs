//! Configuration loading and defaults.
//!
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use trackstrap::config::{parse_config, SetupConfig};
//! use std::path::Path;
//!
//! let config = parse_config("packages: [numpy, tqdm]", Path::new("trackstrap.yml")).unwrap();
//! assert_eq!(config.packages.len(), 2);
//! assert_eq!(config.directories, SetupConfig::default().directories);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    AssetConfig, RequiredPackage, SetupConfig, DEFAULT_ASSET_URL, DEFAULT_DIRECTORIES,
    DEFAULT_PACKAGES,
};
