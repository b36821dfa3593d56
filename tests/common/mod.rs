//! Shared test utilities for ufd-launcher integration tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Get a Command for the ufd-launcher binary with an isolated config path.
///
/// # Panics
///
/// Panics if the binary cannot be found.
#[allow(deprecated)]
pub fn ufd_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ufd-launcher").expect("ufd-launcher binary should exist");
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(workdir.join("config.toml"));
    cmd
}

/// Same setup as [`ufd_cmd`], as a plain process with piped stdio, for
/// tests that must observe the launcher while it is still running.
pub fn ufd_process(workdir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_ufd-launcher"));
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(workdir.join("config.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// A stand-in for the dialog executable.
///
/// It records its arguments in `args.txt` and prints the contents of
/// `selection.txt` (both next to the script) on stdout.
pub struct FakeDialog {
    dir: PathBuf,
}

impl FakeDialog {
    pub fn install(dir: &Path) -> Self {
        let dialog_dir = dir.join("dialog");
        fs::create_dir_all(&dialog_dir).expect("create dialog dir");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{args}'\n[ -f '{selection}' ] && cat '{selection}'\nexit 0\n",
            args = dialog_dir.join("args.txt").display(),
            selection = dialog_dir.join("selection.txt").display(),
        );
        let program = dialog_dir.join("ufd");
        fs::write(&program, script).expect("write fake dialog");
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755))
            .expect("make fake dialog executable");

        Self { dir: dialog_dir }
    }

    pub fn program(&self) -> PathBuf {
        self.dir.join("ufd")
    }

    /// Set what the dialog prints on its next run.
    pub fn select(&self, output: &str) {
        fs::write(self.dir.join("selection.txt"), output).expect("write selection");
    }

    /// Arguments the dialog received on its last run.
    pub fn received_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.join("args.txt"))
            .expect("read recorded args")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
