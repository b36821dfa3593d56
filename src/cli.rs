//! Command-line arguments. Every flag overrides the matching config key.

use crate::config::paths;
use crate::config::user::Config;
use crate::relay::RelayMode;
use crate::selection::Slashes;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Open the Universal File Dialog and print the selected paths, one per line.
#[derive(Parser, Debug, Default)]
#[command(name = "ufd-launcher", version)]
pub struct Args {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dialog executable
    #[arg(long, value_name = "PATH")]
    pub program: Option<PathBuf>,

    /// How the dialog's output is collected
    #[arg(long, value_enum)]
    pub relay: Option<RelayMode>,

    /// File name used by the temp-file relay, relative to the working directory
    #[arg(long, value_name = "NAME")]
    pub temp_file: Option<String>,

    /// Dialog window title
    #[arg(long)]
    pub title: Option<String>,

    /// Rewrite path delimiters before printing
    #[arg(long, value_enum)]
    pub slashes: Option<Slashes>,

    /// Exit right after printing instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Save the effective configuration to the config path and exit
    #[arg(long)]
    pub write_config: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::config_file)
    }

    /// Layer the flags that were given over `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(program) = &self.program {
            config.dialog.program = Some(program.clone());
        }
        if let Some(title) = &self.title {
            config.dialog.options.title = Some(title.clone());
        }
        if let Some(mode) = self.relay {
            config.relay.mode = mode;
        }
        if let Some(temp_file) = &self.temp_file {
            config.relay.temp_file = temp_file.clone();
        }
        if let Some(slashes) = self.slashes {
            config.output.slashes = slashes;
        }
        if self.no_pause {
            config.output.pause_on_exit = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_config_untouched() {
        let mut config = Config::default();
        config.dialog.program = Some(PathBuf::from("/from/config"));
        let before = config.clone();

        Args::parse_from(["ufd-launcher"]).apply_to(&mut config);

        assert_eq!(config, before);
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.dialog.program = Some(PathBuf::from("/from/config"));
        config.dialog.options.multiselect = Some(false);

        let args = Args::parse_from([
            "ufd-launcher",
            "--program",
            "/from/cli",
            "--relay",
            "temp-file",
            "--temp-file",
            "picked.txt",
            "--slashes",
            "back",
            "--title",
            "Choose",
            "--no-pause",
            "-vv",
        ]);
        args.apply_to(&mut config);

        assert_eq!(args.verbose, 2);
        assert_eq!(config.dialog.program, Some(PathBuf::from("/from/cli")));
        assert_eq!(config.dialog.options.title.as_deref(), Some("Choose"));
        assert_eq!(config.dialog.options.multiselect, Some(false));
        assert_eq!(config.relay.mode, RelayMode::TempFile);
        assert_eq!(config.relay.temp_file, "picked.txt");
        assert_eq!(config.output.slashes, Slashes::Back);
        assert!(!config.output.pause_on_exit);
    }

    #[test]
    fn explicit_config_path_wins() {
        let args = Args::parse_from(["ufd-launcher", "--config", "/tmp/ufd.toml"]);
        assert_eq!(args.config_path(), PathBuf::from("/tmp/ufd.toml"));
    }
}
