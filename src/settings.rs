//! Effective run settings, resolved from the merged config.

use crate::config::user::Config;
use crate::dialog::{DialogInvocation, DEFAULT_PROGRAM};
use crate::relay::Relay;
use crate::selection::Slashes;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub invocation: DialogInvocation,
    pub relay: Relay,
    pub slashes: Slashes,
    pub pause_on_exit: bool,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        let program = config
            .dialog
            .program
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM));

        Self {
            invocation: DialogInvocation::new(program, &config.dialog.options),
            relay: Relay::new(config.relay.mode, &config.relay.temp_file),
            slashes: config.output.slashes,
            pause_on_exit: config.output.pause_on_exit,
        }
    }
}
