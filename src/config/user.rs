//! User-configurable settings stored in ~/.config/ufd-launcher/config.toml

use crate::dialog::DialogOptions;
use crate::relay::RelayMode;
use crate::selection::Slashes;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Temp file name used by the legacy relay when nothing else is configured.
pub const DEFAULT_TEMP_FILE: &str = "paths.txt";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dialog: DialogConfig,
    pub relay: RelayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DialogConfig {
    /// Dialog executable; the built-in path is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
    #[serde(flatten)]
    pub options: DialogOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    pub mode: RelayMode,
    /// Only read by the temp-file relay, relative to the working directory
    pub temp_file: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            mode: RelayMode::default(),
            temp_file: DEFAULT_TEMP_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub slashes: Slashes,
    /// Block on a keypress after printing
    pub pause_on_exit: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            slashes: Slashes::default(),
            pause_on_exit: true,
        }
    }
}

impl Config {
    /// Load config from `path`, returning defaults for any missing keys or
    /// if the file does not exist yet.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Could not read config ({e}), using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config parse error ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Atomically write config to `path`.
    /// Writes to a temp file first, then renames over the real one.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(ConfigError::Io)?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, &content).map_err(ConfigError::Io)?;
        std::fs::rename(&tmp_path, path).map_err(ConfigError::Io)?;

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Serialize(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
