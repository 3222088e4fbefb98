//! Core configuration types.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Program-defined verbosity levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Each mutating syscall outcome
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Mutating syscall outcomes are logged at debug, so `Info` opens debug.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::ERROR,
            LogLevel::Normal => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::DEBUG,
            LogLevel::Debug => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Quiet));
        assert_eq!("normal".parse::<LogLevel>().unwrap(), LogLevel::Normal);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(LogLevel::Quiet.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Normal.level_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::Info.level_filter(), LevelFilter::DEBUG);
        assert_eq!(LogLevel::Debug.level_filter(), LevelFilter::TRACE);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
            assert_eq!(LogLevel::parse(&lvl.to_string()), Some(lvl));
        }
    }
}
