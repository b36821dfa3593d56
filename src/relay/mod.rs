//! Relays carry the dialog's stdout back into the launcher.
//!
//! Collection never fails: whatever went wrong is logged and the bytes
//! obtained so far (usually none) are returned.

mod pipe;
mod temp_file;

use crate::dialog::DialogInvocation;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the dialog's output is captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RelayMode {
    /// Spawn the dialog and read its stdout directly
    #[default]
    Pipe,
    /// Redirect the dialog's stdout into a file through the shell, then read it
    TempFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relay {
    Pipe,
    TempFile(PathBuf),
}

impl Relay {
    pub fn new(mode: RelayMode, temp_file: impl Into<PathBuf>) -> Self {
        match mode {
            RelayMode::Pipe => Relay::Pipe,
            RelayMode::TempFile => Relay::TempFile(temp_file.into()),
        }
    }

    /// Run the dialog to completion and return its raw stdout.
    pub fn collect(&self, invocation: &DialogInvocation) -> Vec<u8> {
        match self {
            Relay::Pipe => pipe::collect(invocation),
            Relay::TempFile(path) => temp_file::collect(invocation, path),
        }
    }
}
