//! Legacy handshake: the shell redirects the dialog's stdout into a
//! fixed-name file which is read back and deleted.

use crate::dialog::DialogInvocation;
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

pub fn collect(invocation: &DialogInvocation, path: &Path) -> Vec<u8> {
    // A file left behind by an earlier run must not leak into this one.
    discard(path);

    let line = invocation.shell_line(&path.to_string_lossy());
    info!("Executing via shell: {}", line);

    match shell(&line).status() {
        Ok(status) if !status.success() => warn!("Shell exited with {}", status),
        Ok(_) => {}
        Err(err) => warn!("Failed to start shell: {}", err),
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("Could not read {}: {}", path.display(), err);
            Vec::new()
        }
    };

    discard(path);
    bytes
}

fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("Removed {}", path.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => debug!("Could not remove {}: {}", path.display(), err),
    }
}

#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new("cmd");
    command.raw_arg(cmd_arguments(line));
    command
}

/// `/S` makes `cmd` strip exactly the outer pair of quotes, leaving the
/// quoted words and the redirect of `line` intact.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_arguments(line: &str) -> String {
    format!("/S /C \"{line}\"")
}
