//! Pretrained model download.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AssetConfig;
use crate::error::{Result, SetupError};
use crate::fetch::HttpFetcher;
use crate::ui::{format_bytes, hints, UserInterface};

/// What the asset step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// The file was already on disk; nothing was fetched.
    AlreadyPresent(PathBuf),
    /// The file was downloaded.
    Downloaded { path: PathBuf, bytes: u64 },
}

/// Ensure the asset exists under `workspace`, building an HTTP client only
/// when a download is needed.
///
/// A client that cannot be built is reported like any other download fault.
pub fn ensure_asset(
    workspace: &Path,
    asset: &AssetConfig,
    ui: &mut dyn UserInterface,
) -> Result<AssetOutcome> {
    let target = workspace.join(&asset.directory).join(&asset.filename);
    if target.exists() {
        ui.success(&format!("{} already present", asset.filename));
        return Ok(AssetOutcome::AlreadyPresent(target));
    }

    match HttpFetcher::new() {
        Ok(fetcher) => fetch_asset(&fetcher, workspace, asset, ui),
        Err(e) => Err(report_failure(asset, format!("{:#}", e), ui)),
    }
}

/// Ensure the asset exists under `workspace`, downloading it if absent.
///
/// Presence is checked by path only. On failure the manual download URL is
/// printed and no file is left at the target path.
pub fn fetch_asset(
    fetcher: &HttpFetcher,
    workspace: &Path,
    asset: &AssetConfig,
    ui: &mut dyn UserInterface,
) -> Result<AssetOutcome> {
    let dir = workspace.join(&asset.directory);
    let target = dir.join(&asset.filename);

    if target.exists() {
        ui.success(&format!("{} already present", asset.filename));
        return Ok(AssetOutcome::AlreadyPresent(target));
    }

    if let Err(e) = fs::create_dir_all(&dir) {
        let message = format!("cannot create {}: {}", dir.display(), e);
        return Err(report_failure(asset, message, ui));
    }

    let mut spinner = ui.start_spinner(&format!("Downloading {}", asset.filename));
    let result = fetcher.download_to(&asset.url, &target, |written, total| {
        let progress = match total {
            Some(total) => format!(
                "Downloading {} ({} / {})",
                asset.filename,
                format_bytes(written),
                format_bytes(total)
            ),
            None => format!("Downloading {} ({})", asset.filename, format_bytes(written)),
        };
        spinner.set_message(&progress);
    });

    match result {
        Ok(bytes) => {
            spinner.finish_success(&format!(
                "Downloaded {} ({})",
                asset.filename,
                format_bytes(bytes)
            ));
            Ok(AssetOutcome::Downloaded {
                path: target,
                bytes,
            })
        }
        Err(e) => {
            let message = format!("{:#}", e);
            spinner.finish_error(&format!("Failed to download {}: {}", asset.filename, message));
            drop(spinner);
            Err(manual_fallback(asset, message, ui))
        }
    }
}

fn report_failure(asset: &AssetConfig, message: String, ui: &mut dyn UserInterface) -> SetupError {
    ui.error(&format!("Failed to download {}: {}", asset.filename, message));
    manual_fallback(asset, message, ui)
}

fn manual_fallback(asset: &AssetConfig, message: String, ui: &mut dyn UserInterface) -> SetupError {
    ui.show_hint(&hints::manual_download(&asset.url));
    SetupError::Download {
        url: asset.url.clone(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::partial_path;
    use crate::ui::mock::SpinnerStatus;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn asset_for(url: String) -> AssetConfig {
        AssetConfig {
            url,
            filename: "model.pth".to_string(),
            directory: PathBuf::from("pretrained_models"),
        }
    }

    #[test]
    fn existing_file_skips_network() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/model.pth");
            then.status(200).body("new weights");
        });
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pretrained_models");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("model.pth"), "old weights").unwrap();
        let fetcher = HttpFetcher::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = fetch_asset(
            &fetcher,
            temp.path(),
            &asset_for(server.url("/model.pth")),
            &mut ui,
        )
        .unwrap();

        assert!(matches!(outcome, AssetOutcome::AlreadyPresent(_)));
        mock.assert_calls(0);
        assert_eq!(
            std::fs::read_to_string(dir.join("model.pth")).unwrap(),
            "old weights"
        );
        assert!(ui.has_success("already present"));
    }

    #[test]
    fn downloads_into_created_directory() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/model.pth");
            then.status(200).body("weights");
        });
        let temp = TempDir::new().unwrap();
        let fetcher = HttpFetcher::new().unwrap();
        let mut ui = MockUI::new();

        let outcome = fetch_asset(
            &fetcher,
            temp.path(),
            &asset_for(server.url("/model.pth")),
            &mut ui,
        )
        .unwrap();

        mock.assert();
        let target = temp.path().join("pretrained_models/model.pth");
        assert_eq!(
            outcome,
            AssetOutcome::Downloaded {
                path: target.clone(),
                bytes: 7
            }
        );
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "weights");
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Success);
    }

    #[test]
    fn server_error_leaves_no_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/model.pth");
            then.status(404);
        });
        let temp = TempDir::new().unwrap();
        let fetcher = HttpFetcher::new().unwrap();
        let mut ui = MockUI::new();
        let asset = asset_for(server.url("/model.pth"));

        let err = fetch_asset(&fetcher, temp.path(), &asset, &mut ui).unwrap_err();

        assert!(matches!(err, SetupError::Download { .. }));
        let target = temp.path().join("pretrained_models/model.pth");
        assert!(!target.exists());
        assert!(!partial_path(&target).exists());
        assert!(ui.has_hint(&asset.url));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
    }

    #[test]
    fn unreachable_server_is_a_download_error() {
        let temp = TempDir::new().unwrap();
        let fetcher = HttpFetcher::new().unwrap();
        let mut ui = MockUI::new();
        let asset = asset_for("http://127.0.0.1:1/model.pth".to_string());

        let err = fetch_asset(&fetcher, temp.path(), &asset, &mut ui).unwrap_err();

        assert!(err.to_string().contains("127.0.0.1:1"));
        assert!(!temp.path().join("pretrained_models/model.pth").exists());
        assert!(ui.has_hint("Download it manually"));
    }

    #[test]
    fn failure_before_transfer_prints_error_and_manual_url() {
        let asset = asset_for("https://example.com/model.pth".to_string());
        let mut ui = MockUI::new();

        let err = report_failure(&asset, "TLS backend unavailable".to_string(), &mut ui);

        assert!(matches!(err, SetupError::Download { .. }));
        assert!(ui.has_error("Failed to download model.pth: TLS backend unavailable"));
        assert!(ui.has_hint("Download it manually: https://example.com/model.pth"));
    }

    #[test]
    fn ensure_asset_skips_client_when_present() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("pretrained_models");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("model.pth"), "weights").unwrap();
        let mut ui = MockUI::new();

        let outcome = ensure_asset(
            temp.path(),
            &asset_for("http://127.0.0.1:1/model.pth".to_string()),
            &mut ui,
        )
        .unwrap();

        assert_eq!(outcome, AssetOutcome::AlreadyPresent(dir.join("model.pth")));
    }

    #[test]
    fn ensure_asset_downloads_when_absent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/model.pth");
            then.status(200).body("weights");
        });
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let outcome =
            ensure_asset(temp.path(), &asset_for(server.url("/model.pth")), &mut ui).unwrap();

        mock.assert();
        assert!(matches!(outcome, AssetOutcome::Downloaded { bytes: 7, .. }));
    }
}
