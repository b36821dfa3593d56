//! Logger setup. Logs go to stderr so stdout carries only paths.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Map the `-v` count to a level; silent by default.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let _ = SimpleLogger::new()
        .with_level(level_for(verbosity))
        .env()
        .init();
}
