#![deny(missing_docs)]
//! Shared logging utilities for the mission control workspace.
//!
//! This crate provides the `mission_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Every
//! line is prefixed with the UI loop tick of the calling thread so that log
//! output can be lined up with what was on screen.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the current UI loop tick.
    static LOOP_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the UI loop tick for the current thread.
/// The application loop calls this once per iteration.
pub fn set_loop_tick(tick: u64) {
    LOOP_TICK.with(|v| v.set(tick));
}

/// Retrieves the UI loop tick for the current thread.
/// Returns 0 on threads that never set one (engine worker, tests).
pub fn loop_tick() -> u64 {
    LOOP_TICK.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the loop tick.
#[macro_export]
macro_rules! mission_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[t{}] {}", $crate::loop_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the loop tick.
#[macro_export]
macro_rules! mission_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[t{}] {}", $crate::loop_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the loop tick.
#[macro_export]
macro_rules! mission_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[t{}] {}", $crate::loop_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the loop tick.
#[macro_export]
macro_rules! mission_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[t{}] {}", $crate::loop_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the loop tick.
#[macro_export]
macro_rules! mission_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[t{}] {}", $crate::loop_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
