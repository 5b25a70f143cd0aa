/// Core logging implementation with automatic filtering
use super::config::{get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Verbose level requires --verbose or --verbose-<tag>
/// 3. Debug level requires --debug-<tag> (or a Debug/Verbose threshold)
/// 4. Anything else above the minimum level threshold is dropped
/// 5. With --only-<tag> flags, other tags are dropped
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    if level == LogLevel::Error {
        return true;
    }

    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose || is_verbose_enabled_for_tag(tag);
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    if level > config.min_level {
        return false;
    }

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&tag.to_debug_key()) {
        return false;
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::super::config::{set_logger_config, LoggerConfig};
    use super::*;

    // Single test so the global config is not raced by parallel tests
    #[test]
    fn test_filtering_rules() {
        set_logger_config(LoggerConfig::default());
        assert!(should_log(&LogTag::Client, LogLevel::Error));
        assert!(should_log(&LogTag::Client, LogLevel::Info));
        assert!(!should_log(&LogTag::Client, LogLevel::Debug));
        assert!(!should_log(&LogTag::Client, LogLevel::Verbose));

        let mut config = LoggerConfig::default();
        config.debug_tags.insert("webserver".to_string());
        set_logger_config(config);
        assert!(should_log(&LogTag::Webserver, LogLevel::Debug));
        assert!(!should_log(&LogTag::Orders, LogLevel::Debug));

        // --log-level debug opens debug output for every tag
        set_logger_config(LoggerConfig::from_args(&[
            "clob-bridge".to_string(),
            "--log-level".to_string(),
            "debug".to_string(),
        ]));
        assert!(should_log(&LogTag::Orders, LogLevel::Debug));
        assert!(should_log(&LogTag::Client, LogLevel::Debug));
        assert!(!should_log(&LogTag::Client, LogLevel::Verbose));

        set_logger_config(LoggerConfig::from_args(&[
            "clob-bridge".to_string(),
            "--only-orders".to_string(),
        ]));
        assert!(should_log(&LogTag::Orders, LogLevel::Info));
        assert!(!should_log(&LogTag::System, LogLevel::Warning));
        assert!(should_log(&LogTag::System, LogLevel::Error));

        set_logger_config(LoggerConfig::default());
    }
}
