//! Integration tests for the trackstrap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("trackstrap"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OSTrack"))
        .stdout(predicate::str::contains("--workspace_dir"))
        .stdout(predicate::str::contains("--skip_download"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("trackstrap"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("trackstrap"));
    cmd.arg("--workspace-dir").arg(".");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_missing_config_override_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("trackstrap"));
    cmd.current_dir(temp.path())
        .args(["--config", "missing.yml", "--skip_download"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[cfg(unix)]
mod with_fake_interpreter {
    use super::*;
    use httpmock::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Write a shell script that answers like a Python interpreter.
    ///
    /// Script invocations are appended to `calls.log` next to it.
    fn fake_python(dir: &Path, version: &str, missing: &[&str]) -> PathBuf {
        let log = dir.join("calls.log");
        let script = format!(
            r#"#!/bin/sh
case "$1" in
  --version)
    echo "Python {version}"
    ;;
  -c)
    case "$2" in
      *torch.cuda*)
        echo unavailable
        ;;
      "import "*)
        mod="${{2#import }}"
        case " {missing} " in
          *" $mod "*)
            echo "ModuleNotFoundError: No module named '$mod'" >&2
            exit 1
            ;;
        esac
        ;;
    esac
    ;;
  *)
    echo "$@" >> "{log}"
    ;;
esac
exit 0
"#,
            version = version,
            missing = missing.join(" "),
            log = log.display(),
        );
        let path = dir.join("python");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    struct Fixture {
        _bin: TempDir,
        bin_dir: PathBuf,
        python: PathBuf,
        workspace: TempDir,
    }

    impl Fixture {
        fn new(version: &str, missing: &[&str]) -> Self {
            let bin = TempDir::new().unwrap();
            let bin_dir = bin.path().to_path_buf();
            let python = fake_python(&bin_dir, version, missing);
            Self {
                _bin: bin,
                bin_dir,
                python,
                workspace: TempDir::new().unwrap(),
            }
        }

        fn command(&self) -> Command {
            let mut cmd = Command::new(cargo_bin("trackstrap"));
            cmd.current_dir(self.workspace.path())
                .env_remove("TRACKSTRAP_PYTHON")
                .env_remove("RUST_LOG")
                .arg("--python")
                .arg(&self.python);
            cmd
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.bin_dir.join("calls.log"))
                .map(|s| s.lines().map(String::from).collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn defaults_with_skip_download_succeed() {
        let fx = Fixture::new("3.10.12", &[]);

        fx.command()
            .arg("--skip_download")
            .assert()
            .success()
            .stdout(predicate::str::contains("Python 3.10.12"))
            .stdout(predicate::str::contains("OSTrack environment is ready"));

        let root = fx.workspace.path().canonicalize().unwrap();
        for dir in trackstrap::config::DEFAULT_DIRECTORIES {
            assert!(root.join(dir).is_dir(), "{} was not created", dir);
        }
        assert!(!root.join("pretrained_models/mae_pretrain_vit_base.pth").exists());

        let calls = fx.calls();
        assert_eq!(calls.len(), 1);
        let expected = format!(
            "{} --workspace_dir {} --data_dir {} --save_dir {}",
            root.join("tracking/create_default_local_file.py").display(),
            root.display(),
            root.join("data").display(),
            root.join("output").display()
        );
        assert_eq!(calls[0], expected);
    }

    #[test]
    fn default_run_writes_no_log_records() {
        let fx = Fixture::new("3.10.12", &["wandb"]);

        fx.command()
            .arg("--skip_download")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Missing packages: wandb"))
            .stderr(predicate::str::contains("step failed").not())
            .stderr(predicate::str::contains("bootstrap").not());
    }

    #[test]
    fn failing_configurator_shows_its_stderr() {
        let fx = Fixture::new("3.10.12", &[]);
        let original = fs::read_to_string(&fx.python).unwrap();
        let failing = original.replace(
            "    echo \"$@\" >> ",
            "    echo 'FIRST_STDERR_LINE: settings dir missing' >&2\n    echo 'Traceback tail' >&2\n    exit 1\n    echo \"$@\" >> ",
        );
        assert_ne!(original, failing);
        fs::write(&fx.python, failing).unwrap();

        fx.command()
            .arg("--skip_download")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("FIRST_STDERR_LINE: settings dir missing"))
            .stderr(predicate::str::contains("Setup aborted: project paths step failed"));
    }

    #[test]
    fn rerun_is_idempotent() {
        let fx = Fixture::new("3.8.18", &[]);

        fx.command().arg("--skip_download").assert().success();
        fx.command()
            .arg("--skip_download")
            .assert()
            .success()
            .stdout(predicate::str::contains("(0 created)"));

        assert_eq!(fx.calls().len(), 2);
    }

    #[test]
    fn old_python_fails() {
        let fx = Fixture::new("3.7.17", &[]);

        fx.command()
            .arg("--skip_download")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Python 3.8 or newer is required"));

        assert!(!fx.workspace.path().join("data").exists());
        assert!(fx.calls().is_empty());
    }

    #[test]
    fn missing_packages_fail_with_install_hint() {
        let fx = Fixture::new("3.11.4", &["cv2", "wandb"]);

        fx.command()
            .arg("--skip_download")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Missing packages: opencv-python, wandb",
            ))
            .stdout(predicate::str::contains("pip install opencv-python wandb"));

        assert!(fx.calls().is_empty());
    }

    #[test]
    fn custom_locations_reach_configurator() {
        let fx = Fixture::new("3.10.12", &[]);
        let data = TempDir::new().unwrap();

        fx.command()
            .arg("--skip_download")
            .arg("--data_dir")
            .arg(data.path())
            .args(["--save_dir", "runs"])
            .assert()
            .success();

        let root = fx.workspace.path().canonicalize().unwrap();
        let calls = fx.calls();
        assert!(calls[0].contains(&format!("--data_dir {}", data.path().display())));
        assert!(calls[0].contains(&format!("--save_dir {}", root.join("runs").display())));
    }

    #[test]
    fn config_file_can_override_packages() {
        let fx = Fixture::new("3.10.12", &["wandb"]);
        fs::write(
            fx.workspace.path().join("trackstrap.yml"),
            "packages:\n  - numpy\n  - name: opencv-python\n    import: cv2\n",
        )
        .unwrap();

        fx.command().arg("--skip_download").assert().success();
    }

    #[test]
    fn downloads_missing_asset() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/mae_pretrain_vit_base.pth");
            then.status(200).body("pretrained-weights");
        });
        let fx = Fixture::new("3.10.12", &[]);
        fs::write(
            fx.workspace.path().join("trackstrap.yml"),
            format!("asset:\n  url: {}\n", server.url("/mae_pretrain_vit_base.pth")),
        )
        .unwrap();

        fx.command().assert().success();

        mock.assert();
        let target = fx
            .workspace
            .path()
            .join("pretrained_models/mae_pretrain_vit_base.pth");
        assert_eq!(fs::read_to_string(target).unwrap(), "pretrained-weights");
    }

    #[test]
    fn failed_download_does_not_fail_run() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/mae_pretrain_vit_base.pth");
            then.status(404);
        });
        let fx = Fixture::new("3.10.12", &[]);
        let url = server.url("/mae_pretrain_vit_base.pth");
        fs::write(
            fx.workspace.path().join("trackstrap.yml"),
            format!("asset:\n  url: {}\n", url),
        )
        .unwrap();

        fx.command()
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Download it manually: {}",
                url
            )));

        let dir = fx.workspace.path().join("pretrained_models");
        assert!(!dir.join("mae_pretrain_vit_base.pth").exists());
        assert!(!dir.join("mae_pretrain_vit_base.pth.part").exists());
    }

    #[test]
    fn quiet_mode_hides_step_details() {
        let fx = Fixture::new("3.10.12", &[]);

        fx.command()
            .args(["--skip_download", "--quiet"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Creating directories").not())
            .stdout(predicate::str::contains("OSTrack environment is ready"));
    }

    #[test]
    fn python_from_environment_variable() {
        let fx = Fixture::new("3.9.2", &[]);
        let mut cmd = Command::new(cargo_bin("trackstrap"));
        cmd.current_dir(fx.workspace.path())
            .env("TRACKSTRAP_PYTHON", &fx.python)
            .arg("--skip_download");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Python 3.9.2"));
    }
}
