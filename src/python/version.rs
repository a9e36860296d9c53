//! Python version parsing and comparison.

use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_OUTPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("version regex is valid")
});

/// Oldest interpreter the tracking code supports.
pub const MINIMUM_PYTHON: PythonVersion = PythonVersion::new(3, 8);

/// A Python interpreter version.
///
/// The patch component is optional so that requirements can be written as
/// `3.8`. Comparison against a minimum only looks at major and minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl PythonVersion {
    /// Create a `major.minor` version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Create a full `major.minor.patch` version.
    pub const fn with_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// Python 2 writes the banner to stderr and Python 3 to stdout, so callers
    /// should pass both streams.
    pub fn from_version_output(output: &str) -> Option<Self> {
        let caps = VERSION_OUTPUT.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps.get(3).and_then(|m| m.as_str().parse().ok());
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// Whether this version is at least `minimum` (major.minor only).
    pub fn meets(&self, minimum: &PythonVersion) -> bool {
        (self.major, self.minor) >= (minimum.major, minimum.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid Python version '{}': expected MAJOR.MINOR", s);
        let mut parts = s.trim().split('.');

        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let patch = match parts.next() {
            Some(p) => Some(p.parse().map_err(|_| invalid())?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
