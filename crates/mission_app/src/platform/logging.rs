//! Platform logging initialization for mission_app.
//!
//! The terminal belongs to the dashboard, so logs only ever go to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

use super::config::{AppConfig, LogDestination};

/// Initialize the logger from the loaded config.
///
/// Returns a warning to print after the terminal is restored when the log file
/// could not be created.
pub fn initialize(config: &AppConfig) -> Option<String> {
    let level = config.log_level();
    let loggers: Vec<Box<dyn SharedLogger>> = match config.log_destination() {
        LogDestination::Off => return None,
        LogDestination::File => match create_file_logger(config.log_file(), level, build_config())
        {
            Ok(file_logger) => vec![file_logger],
            Err(warning) => return Some(warning),
        },
    };

    let _ = CombinedLogger::init(loggers);
    None
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Result<Box<WriteLogger<File>>, String> {
    File::create(path)
        .map(|file| WriteLogger::new(level, config, file))
        .map_err(|err| format!("Could not create log file at {:?}: {}", path, err))
}
