//! Logger setup for the page host binary.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./matcher.log";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogDestination {
    /// `./matcher.log` in the working directory.
    File,
    /// Standard output.
    Terminal,
    /// Both of the above.
    Both,
}

impl LogDestination {
    fn wants_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn wants_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Installs the global logger. Records already carry the page clock, so the
/// wall-clock time is kept only for the file log.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            terminal_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(level, file_config(), file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn terminal_config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

fn file_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
