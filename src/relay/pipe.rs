//! Direct stdout capture.

use crate::dialog::DialogInvocation;
use anyhow::{Context, Result};
use log::{info, warn};
use std::process::Stdio;

pub fn collect(invocation: &DialogInvocation) -> Vec<u8> {
    match capture(invocation) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("No output collected: {:#}", err);
            Vec::new()
        }
    }
}

fn capture(invocation: &DialogInvocation) -> Result<Vec<u8>> {
    info!("Executing: {}", invocation);

    let output = invocation
        .command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .with_context(|| format!("failed to start {}", invocation.program.display()))?;

    // A failing dialog may still have printed something worth echoing.
    if !output.status.success() {
        warn!("Dialog exited with {}", output.status);
    }

    Ok(output.stdout)
}
