// SPDX-License-Identifier: Apache-2.0

use crate::cli::atomic::{should_be_quiet, should_be_verbose};

/// ANSI color codes
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Logging level based on what unlatch is currently doing.
#[derive(PartialEq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Dry,
    Unlocked, // 🔓
}

/// Central logger.
/// It is important that most, if not all, prints in unlatch go through this function.
pub fn print_log(level: LogLevel, msg: &str) {
    if should_be_quiet() && level != LogLevel::Error && level != LogLevel::Warning {
        return;
    }

    if level == LogLevel::Info && !should_be_verbose() {
        return;
    }

    let (tag, color) = match level {
        LogLevel::Error => ("ERROR", RED),
        LogLevel::Warning => ("WARNING", YELLOW),
        LogLevel::Info => ("INFO", BOLD),
        LogLevel::Dry => ("DRY-RUN", ORANGE),
        LogLevel::Unlocked => ("🔓", ""),
    };

    let line = if level == LogLevel::Unlocked {
        format!("{} {}", tag, msg)
    } else {
        format!("{}[{}]{} {}", color, tag, RESET, msg)
    };

    if level == LogLevel::Error || level == LogLevel::Warning {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Format-args wrapper over [`print_log`].
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        $crate::util::logging::print_log($level, &format!($($arg)*))
    };
}
