//! Library integration tests.

use std::path::Path;

use trackstrap::config::{parse_config, SetupConfig};
use trackstrap::python::{AcceleratorStatus, FakePython, PythonVersion};
use trackstrap::runner::{AssetState, BootstrapOptions, Bootstrapper, Step};
use trackstrap::ui::MockUI;
use trackstrap::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::UnsupportedPython {
        found: "3.7.1".into(),
        required: "3.8".into(),
    };
    assert!(err.to_string().contains("3.7.1"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> trackstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use trackstrap::cli::Cli;

    let cli = Cli::parse_from(["trackstrap", "--skip_download", "--save_dir", "/tmp/out"]);
    assert!(cli.skip_download);
    assert_eq!(cli.save_dir, Path::new("/tmp/out"));
}

#[test]
fn config_drives_the_run() {
    let workspace = tempfile::tempdir().unwrap();
    let config = parse_config(
        "min_python: \"3.11\"\ndirectories: [data]\n",
        Path::new("trackstrap.yml"),
    )
    .unwrap();
    let python = FakePython::new().with_version(PythonVersion::with_patch(3, 10, 4));
    let options = BootstrapOptions {
        skip_download: true,
        ..BootstrapOptions::new(workspace.path())
    };
    let mut ui = MockUI::new();

    let report = Bootstrapper::new(&config, options).run(&python, &mut ui);

    assert_eq!(report.failed_step, Some(Step::VersionGate));
    assert!(ui.has_error("Python 3.11 or newer is required (found 3.10.4)"));
}

#[test]
fn cuda_device_is_reported() {
    let workspace = tempfile::tempdir().unwrap();
    let config = SetupConfig::default();
    let python = FakePython::new().with_accelerator(AcceleratorStatus::Available {
        device: "NVIDIA A100".into(),
        cuda_version: Some("12.1".into()),
    });
    let options = BootstrapOptions {
        skip_download: true,
        ..BootstrapOptions::new(workspace.path())
    };
    let mut ui = MockUI::new();

    let report = Bootstrapper::new(&config, options).run(&python, &mut ui);

    assert!(report.success());
    assert_eq!(report.asset, AssetState::Skipped);
    assert!(report.accelerator.unwrap().is_available());
    assert!(ui.has_success("NVIDIA A100"));
    assert!(ui.has_message("12.1"));
}
