#![deny(missing_docs)]
//! Shared logging utilities for the resume matcher workspace.
//!
//! This crate provides the `matcher_*` logging macros used by the page host
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the page's virtual clock so timer-driven behaviour can be
//! followed in the log.

use std::cell::Cell;

thread_local! {
    /// Virtual milliseconds since the page started, as seen by the host.
    static PAGE_CLOCK_MS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the virtual page time for the current thread.
/// The page host calls this every time it advances its clock.
pub fn set_page_clock_ms(now_ms: u64) {
    PAGE_CLOCK_MS.with(|v| v.set(now_ms));
}

/// Retrieves the virtual page time for the current thread.
/// Returns 0 before any page has advanced its clock.
pub fn page_clock_ms() -> u64 {
    PAGE_CLOCK_MS.with(|v| v.get())
}

/// Logs a trace-level message tagged with the page clock.
#[macro_export]
macro_rules! matcher_trace {
    ($($arg:tt)*) => {{
        log::trace!("[t={}ms] {}", $crate::page_clock_ms(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the page clock.
#[macro_export]
macro_rules! matcher_debug {
    ($($arg:tt)*) => {{
        log::debug!("[t={}ms] {}", $crate::page_clock_ms(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the page clock.
#[macro_export]
macro_rules! matcher_info {
    ($($arg:tt)*) => {{
        log::info!("[t={}ms] {}", $crate::page_clock_ms(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the page clock.
#[macro_export]
macro_rules! matcher_warn {
    ($($arg:tt)*) => {{
        log::warn!("[t={}ms] {}", $crate::page_clock_ms(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the page clock.
#[macro_export]
macro_rules! matcher_error {
    ($($arg:tt)*) => {{
        log::error!("[t={}ms] {}", $crate::page_clock_ms(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
