//! Required package audit.

use crate::config::RequiredPackage;
use crate::error::{Result, SetupError};
use crate::python::PythonEnv;
use crate::ui::{hints, StatusKind, UserInterface};

/// Which required packages could be imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Packages that imported, in check order.
    pub present: Vec<RequiredPackage>,
    /// Packages that failed to import, in check order.
    pub missing: Vec<RequiredPackage>,
}

impl AuditReport {
    /// Whether every package imported.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Distribution names of the missing packages.
    pub fn missing_names(&self) -> Vec<String> {
        self.missing.iter().map(|p| p.name.clone()).collect()
    }

    /// Convert into an error when anything is missing.
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(SetupError::MissingPackages {
                packages: self.missing_names(),
            })
        }
    }
}

/// Try importing each package in order and report which are missing.
///
/// When anything is missing, prints the list and a `pip install` line.
pub fn audit_packages(
    python: &dyn PythonEnv,
    packages: &[RequiredPackage],
    ui: &mut dyn UserInterface,
) -> AuditReport {
    let mut report = AuditReport::default();

    for package in packages {
        let ok = python.can_import(&package.module);
        ui.item(StatusKind::from(ok), &package.name);
        if ok {
            report.present.push(package.clone());
        } else {
            report.missing.push(package.clone());
        }
    }

    if report.is_complete() {
        ui.success(&format!("All {} required packages found", packages.len()));
    } else {
        let names = report.missing_names();
        ui.error(&format!("Missing packages: {}", names.join(", ")));
        ui.show_hint(&format!("Run: {}", hints::install_command(&names)));
    }

    report
}
