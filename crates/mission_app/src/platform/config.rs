use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use mission_core::{
    AnalyzerSettings, CounterSettings, DashboardSettings, FeedSettings, StatCard,
    DEFAULT_ANALYSIS_DELAY, DEFAULT_COUNTER_DURATION, DEFAULT_COUNTER_TARGET,
    DEFAULT_FEED_CAPACITY, DEFAULT_FEED_INTERVAL,
};
use mission_engine::EngineConfig;
use mission_logging::{mission_info, mission_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "MISSION_CONTROL_CONFIG";
const CONFIG_FILENAME: &str = "mission_control.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    /// No logging at all.
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedStat {
    value: String,
    label: String,
}

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    counter_target: u64,
    counter_label: String,
    counter_duration_ms: u64,
    frame_interval_ms: u64,
    feed_interval_ms: u64,
    feed_capacity: usize,
    analysis_delay_ms: u64,
    stats: Vec<PersistedStat>,
    log_file: PathBuf,
    log_level: LogLevel,
    log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            counter_target: DEFAULT_COUNTER_TARGET,
            counter_label: CounterSettings::default().label,
            counter_duration_ms: millis(DEFAULT_COUNTER_DURATION),
            frame_interval_ms: 16,
            feed_interval_ms: millis(DEFAULT_FEED_INTERVAL),
            feed_capacity: DEFAULT_FEED_CAPACITY,
            analysis_delay_ms: millis(DEFAULT_ANALYSIS_DELAY),
            stats: mission_core::default_stats()
                .into_iter()
                .map(|card| PersistedStat {
                    value: card.value,
                    label: card.label,
                })
                .collect(),
            log_file: PathBuf::from("./mission_control.log"),
            log_level: LogLevel::Info,
            log_destination: LogDestination::File,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl AppConfig {
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            counter: CounterSettings {
                target: self.counter_target,
                label: self.counter_label.clone(),
                duration: Duration::from_millis(self.counter_duration_ms),
            },
            feed: FeedSettings {
                interval: Duration::from_millis(self.feed_interval_ms.max(1)),
                capacity: self.feed_capacity.max(1),
            },
            analyzer: AnalyzerSettings {
                delay: Duration::from_millis(self.analysis_delay_ms),
            },
            stats: self
                .stats
                .iter()
                .map(|stat| StatCard::new(stat.value.clone(), stat.label.clone()))
                .collect(),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::with_frame_interval(Duration::from_millis(self.frame_interval_ms.max(1)))
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.into()
    }

    pub fn log_destination(&self) -> LogDestination {
        self.log_destination
    }
}

/// Config path from the environment, or `./mission_control.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_FILENAME))
}

/// Reads the config file. A missing file yields `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Result of loading the config, with anything worth logging once a logger
/// exists. The logger itself is configured from this file, so loading
/// cannot log directly.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    pub outcome: Result<bool, ConfigError>,
}

impl LoadedConfig {
    pub fn log_outcome(&self) {
        match &self.outcome {
            Ok(true) => mission_info!("Loaded config from {:?}", self.path),
            Ok(false) => mission_info!("No config at {:?}; using defaults", self.path),
            Err(err) => mission_warn!("{}; using defaults", err),
        }
    }
}

/// Loads the config, falling back to defaults on any problem.
pub fn load_config(path: &Path) -> LoadedConfig {
    let (config, outcome) = match read_config(path) {
        Ok(Some(config)) => (config, Ok(true)),
        Ok(None) => (AppConfig::default(), Ok(false)),
        Err(err) => (AppConfig::default(), Err(err)),
    };
    LoadedConfig {
        config,
        path: path.to_path_buf(),
        outcome,
    }
}
