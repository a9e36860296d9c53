//! Configuration schema definitions for trackstrap.
//!
//! This module contains the struct definitions that map to the optional
//! `trackstrap.yml` file. Every field has a built-in default, so an empty
//! file (or no file at all) describes the standard OSTrack workspace.

use serde::Deserialize;
use std::path::PathBuf;

use crate::python::{PythonVersion, MINIMUM_PYTHON};

/// Default helper that records workspace locations for the tracking code.
pub const DEFAULT_PATH_SCRIPT: &str = "tracking/create_default_local_file.py";

/// Default location of the MAE ViT-Base pretrained weights.
pub const DEFAULT_ASSET_URL: &str =
    "https://dl.fbaipublicfiles.com/mae/pretrain/mae_pretrain_vit_base.pth";

/// Default filename for the pretrained weights.
pub const DEFAULT_ASSET_FILENAME: &str = "mae_pretrain_vit_base.pth";

/// Default directory (relative to the workspace) holding pretrained weights.
pub const DEFAULT_ASSET_DIR: &str = "pretrained_models";

/// Workspace directories created by default, relative to the workspace root.
pub const DEFAULT_DIRECTORIES: &[&str] = &[
    "data",
    "data/lasot",
    "data/got10k/train",
    "data/got10k/val",
    "data/got10k/test",
    "data/trackingnet",
    "data/coco/annotations",
    "data/coco/images",
    "pretrained_models",
    "output",
    "output/checkpoints",
    "output/checkpoints/train",
    "output/checkpoints/train/ostrack",
    "output/test",
];

/// Packages the tracking code imports, as (distribution, module) pairs.
pub const DEFAULT_PACKAGES: &[(&str, &str)] = &[
    ("torch", "torch"),
    ("torchvision", "torchvision"),
    ("opencv-python", "cv2"),
    ("numpy", "numpy"),
    ("pandas", "pandas"),
    ("tqdm", "tqdm"),
    ("pycocotools", "pycocotools"),
    ("timm", "timm"),
    ("wandb", "wandb"),
];

/// Root configuration structure for trackstrap.yml
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Interpreter to probe (overridden by `--python`)
    pub python: Option<String>,

    /// Oldest acceptable interpreter version
    pub min_python: PythonVersion,

    /// Path configuration helper, relative to the current directory
    pub path_script: PathBuf,

    /// Packages that must be importable
    pub packages: Vec<RequiredPackage>,

    /// Directories to create under the workspace
    pub directories: Vec<PathBuf>,

    /// Pretrained model download
    pub asset: AssetConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: None,
            min_python: MINIMUM_PYTHON,
            path_script: PathBuf::from(DEFAULT_PATH_SCRIPT),
            packages: DEFAULT_PACKAGES
                .iter()
                .map(|(name, module)| RequiredPackage::with_module(*name, *module))
                .collect(),
            directories: DEFAULT_DIRECTORIES.iter().map(PathBuf::from).collect(),
            asset: AssetConfig::default(),
        }
    }
}

/// A package that must be importable.
///
/// In YAML either a bare name (`- numpy`) or a map with a distinct import
/// name (`- { name: opencv-python, import: cv2 }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PackageEntry")]
pub struct RequiredPackage {
    /// Name passed to `pip install`.
    pub name: String,
    /// Name passed to `import`.
    pub module: String,
}

impl RequiredPackage {
    /// A package whose import name equals its distribution name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            module: name.clone(),
            name,
        }
    }

    /// A package imported under a different name.
    pub fn with_module(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(rename = "import")]
        module: Option<String>,
    },
}

impl From<PackageEntry> for RequiredPackage {
    fn from(entry: PackageEntry) -> Self {
        match entry {
            PackageEntry::Name(name) => Self::new(name),
            PackageEntry::Detailed { name, module } => match module {
                Some(module) => Self::with_module(name, module),
                None => Self::new(name),
            },
        }
    }
}

/// A file downloaded into the workspace when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Source URL
    pub url: String,

    /// Target filename
    pub filename: String,

    /// Target directory, relative to the workspace
    pub directory: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ASSET_URL.to_string(),
            filename: DEFAULT_ASSET_FILENAME.to_string(),
            directory: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}
