/// Logger filtering configuration
///
/// Built once from command-line flags by `init_from_args`, readable from any
/// thread afterwards.
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<String>,
    /// Tags with `--verbose-<tag>` enabled
    pub verbose_tags: HashSet<String>,
    /// Tags with `--only-<tag>`; if non-empty, only these are shown (errors excepted)
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

impl LoggerConfig {
    /// Parse logger flags from a full argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();

        for (i, arg) in args.iter().enumerate() {
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if let Some(tag) = arg.strip_prefix("--verbose-") {
                config.verbose_tags.insert(tag.to_lowercase());
            } else if let Some(tag) = arg.strip_prefix("--debug-") {
                config.debug_tags.insert(tag.to_lowercase());
            } else if let Some(tag) = arg.strip_prefix("--only-") {
                config.enabled_tags.insert(tag.to_lowercase());
            } else if let Some(level) = arg.strip_prefix("--log-level=") {
                if let Some(level) = LogLevel::parse(level) {
                    config.min_level = level;
                }
            } else if arg == "--log-level" {
                if let Some(level) = args.get(i + 1).and_then(|l| LogLevel::parse(l)) {
                    config.min_level = level;
                }
            }
        }

        config
    }
}

/// Build the logger configuration from the process arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&arguments::get_cmd_args()));
}

/// Debug lines show for every tag at `--log-level debug` or above
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.min_level >= LogLevel::Debug || config.debug_tags.contains(&tag.to_debug_key())
}

pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .verbose_tags
        .contains(&tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("clob-bridge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = LoggerConfig::from_args(&args(&[]));
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
        assert!(config.enabled_tags.is_empty());
    }

    #[test]
    fn test_tag_flags() {
        let config = LoggerConfig::from_args(&args(&[
            "--debug-Webserver",
            "--verbose-client",
            "--only-orders",
            "--only-system",
        ]));
        assert!(config.debug_tags.contains("webserver"));
        assert!(config.verbose_tags.contains("client"));
        assert_eq!(config.enabled_tags.len(), 2);
        assert!(config.enabled_tags.contains("orders"));
        // Per-tag debug does not raise the threshold for other tags
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_forms() {
        assert_eq!(
            LoggerConfig::from_args(&args(&["--log-level", "debug"])).min_level,
            LogLevel::Debug
        );
        assert_eq!(
            LoggerConfig::from_args(&args(&["--log-level=warning"])).min_level,
            LogLevel::Warning
        );
        assert_eq!(
            LoggerConfig::from_args(&args(&["--log-level", "loud"])).min_level,
            LogLevel::Info
        );
        assert_eq!(
            LoggerConfig::from_args(&args(&["--quiet"])).min_level,
            LogLevel::Warning
        );
    }
}
