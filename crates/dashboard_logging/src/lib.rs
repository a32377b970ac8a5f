#![deny(missing_docs)]
//! Shared logging utilities for the dashboard workspace.
//!
//! This crate provides the `dash_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every message is
//! prefixed with the render pass of the thread that emitted it, so log lines
//! can be lined up with the frames the app printed.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current render pass.
    static RENDER_PASS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the render pass for the current thread.
/// The app loop calls this once per rendered frame.
pub fn set_render_pass(pass: u64) {
    RENDER_PASS.with(|v| v.set(pass));
}

/// Retrieves the render pass for the current thread.
/// Returns 0 on threads that never render (poller, stdin reader).
pub fn render_pass() -> u64 {
    RENDER_PASS.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current render pass.
#[macro_export]
macro_rules! dash_trace {
    ($($arg:tt)*) => {{
        log::trace!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current render pass.
#[macro_export]
macro_rules! dash_debug {
    ($($arg:tt)*) => {{
        log::debug!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current render pass.
#[macro_export]
macro_rules! dash_info {
    ($($arg:tt)*) => {{
        log::info!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current render pass.
#[macro_export]
macro_rules! dash_warn {
    ($($arg:tt)*) => {{
        log::warn!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current render pass.
#[macro_export]
macro_rules! dash_error {
    ($($arg:tt)*) => {{
        log::error!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
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

    // Another test binary thread may have won the race.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
