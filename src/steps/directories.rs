//! Workspace directory creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::ui::{StatusKind, UserInterface};

/// A directory the provisioner ensured exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDir {
    /// Full path (base joined with the relative entry).
    pub path: PathBuf,
    /// Whether it had to be created on this run.
    pub created: bool,
}

/// Create every directory in `dirs` under `base`, including parents.
///
/// Existing directories are left untouched. The first failure stops the
/// step and is returned as [`SetupError::DirectoryCreation`].
pub fn provision_directories(
    base: &Path,
    dirs: &[PathBuf],
    ui: &mut dyn UserInterface,
) -> Result<Vec<ProvisionedDir>> {
    let mut provisioned = Vec::with_capacity(dirs.len());

    for relative in dirs {
        let path = base.join(relative);
        let existed = path.is_dir();

        if let Err(source) = fs::create_dir_all(&path) {
            let err = SetupError::DirectoryCreation { path, source };
            ui.error(&err.to_string());
            return Err(err);
        }

        if existed {
            ui.item(
                StatusKind::Skipped,
                &format!("{} (already exists)", relative.display()),
            );
        } else {
            ui.item(StatusKind::Success, &format!("Created {}", relative.display()));
        }

        provisioned.push(ProvisionedDir {
            path,
            created: !existed,
        });
    }

    let created = provisioned.iter().filter(|d| d.created).count();
    ui.success(&format!(
        "{} directories ready ({} created)",
        provisioned.len(),
        created
    ));
    Ok(provisioned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn creates_all_default_directories() {
        let temp = TempDir::new().unwrap();
        let dirs = SetupConfig::default().directories;
        let mut ui = MockUI::new();

        let result = provision_directories(temp.path(), &dirs, &mut ui).unwrap();

        assert_eq!(result.len(), 14);
        for dir in &dirs {
            assert!(temp.path().join(dir).is_dir(), "{} missing", dir.display());
        }
        assert!(ui.has_success("14 directories ready"));
    }

    #[test]
    fn second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = SetupConfig::default().directories;

        let mut first_ui = MockUI::new();
        let first = provision_directories(temp.path(), &dirs, &mut first_ui).unwrap();

        let mut second_ui = MockUI::new();
        let second = provision_directories(temp.path(), &dirs, &mut second_ui).unwrap();

        assert_eq!(
            first.iter().map(|d| &d.path).collect::<Vec<_>>(),
            second.iter().map(|d| &d.path).collect::<Vec<_>>()
        );
        assert!(second.iter().all(|d| !d.created));
        assert!(second_ui.errors().is_empty());
        assert!(second_ui.has_success("(0 created)"));
    }

    #[test]
    fn parent_created_earlier_in_list_counts_as_existing() {
        let temp = TempDir::new().unwrap();
        let dirs = vec![PathBuf::from("data/got10k/train"), PathBuf::from("data")];
        let mut ui = MockUI::new();

        let result = provision_directories(temp.path(), &dirs, &mut ui).unwrap();

        assert!(result[0].created);
        assert!(!result[1].created);
        assert!(ui.has_item(StatusKind::Skipped, "data (already exists)"));
    }

    #[test]
    fn file_in_the_way_is_fatal() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("output"), "not a directory").unwrap();
        let dirs = vec![PathBuf::from("data"), PathBuf::from("output/checkpoints")];
        let mut ui = MockUI::new();

        let err = provision_directories(temp.path(), &dirs, &mut ui).unwrap_err();

        assert!(matches!(err, SetupError::DirectoryCreation { .. }));
        assert!(ui.has_error("output"));
        assert!(temp.path().join("data").is_dir());
    }
}
