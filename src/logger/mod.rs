//! Structured console logging for the bridge
//!
//! ## Usage
//!
//! ```rust
//! use clob_bridge::logger::{self, LogTag};
//!
//! logger::error(LogTag::Client, "Connection failed");
//! logger::warning(LogTag::Config, "Config file not found, using defaults");
//! logger::info(LogTag::Orders, "Market order placed");
//! logger::debug(LogTag::Webserver, "GET /orders -> 200"); // Only if --debug-webserver
//! logger::verbose(LogTag::Client, "Raw reply: ..."); // Only if --verbose
//! ```
//!
//! Call `logger::init()` once at startup so `--debug-<tag>`, `--verbose` and
//! `--quiet` flags are picked up.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when `--debug-<tag>` is provided for this tag, e.g.
/// `--debug-webserver` for `LogTag::Webserver`.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose or --verbose-<tag>)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
