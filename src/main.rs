//! ufd-launcher: opens the Universal File Dialog and echoes the picked paths.

mod cli;
mod config;
mod console;
mod dialog;
mod logging;
mod relay;
mod selection;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::user::Config;
use log::{error, info};
use selection::Selection;
use settings::Settings;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    info!("Starting ufd-launcher v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config_path();
    let mut config = Config::load_from(&config_path);
    args.apply_to(&mut config);

    if args.write_config {
        return match config.save_to(&config_path) {
            Ok(()) => {
                println!("Configuration saved to {}", config_path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to save config: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let settings = Settings::from_config(&config);
    if let Err(e) = run(&settings) {
        error!("{:#}", e);
    }

    if settings.pause_on_exit {
        console::wait_for_keypress(io::stdin().lock());
    }

    ExitCode::SUCCESS
}

/// Collect the dialog's output and print it.
fn run(settings: &Settings) -> Result<()> {
    let raw = settings.relay.collect(&settings.invocation);
    let selection = Selection::from_bytes(&raw).normalize(settings.slashes);
    info!("Dialog returned {} path(s)", selection.len());

    selection
        .write_to(io::stdout().lock())
        .context("failed to print selection")
}
