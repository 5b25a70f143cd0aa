//! Log formatting and console output with ANSI colors
//!
//! Handles colorized tag/level columns and broken pipe handling for piped
//! commands. Lines go to stdout only.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Column widths for alignment
const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 8;

/// Format and output a log message
pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let tag_str = format_tag(tag);
    let level_str = format_level(level);

    let base_line = format!("{} [{}] [{}] ", time.dimmed(), tag_str, level_str);

    let mut lines = message.split('\n');
    let first = lines.next().unwrap_or_default();
    print_stdout_safe(&format!("{}{}", base_line, first));

    let continuation_prefix = " ".repeat(time.len() + TAG_WIDTH + LEVEL_WIDTH + 7);
    for line in lines {
        print_stdout_safe(&format!("{}{}", continuation_prefix, line));
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Webserver => label.bright_green().bold(),
        LogTag::Client => label.bright_cyan().bold(),
        LogTag::Orders => label.bright_magenta().bold(),
        LogTag::Other(_) => label.white().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.bright_yellow().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
        LogLevel::Info => label.white().bold(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    let mut out = stdout().lock();
    if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
}
