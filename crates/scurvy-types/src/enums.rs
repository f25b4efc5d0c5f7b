//! Common enumerations used throughout scurvy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{ScurvyError, Result};

/// Log level enumeration, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed trace messages
    Trace,
    /// Debug messages
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
    /// Fatal errors. Only tags the record; nothing exits.
    Fatal,
    /// Panic-level errors. Only tags the record; nothing unwinds.
    Panic,
}

impl LogLevel {
    /// Level used when a requested level name is not recognized.
    pub const FALLBACK: LogLevel = LogLevel::Warn;

    /// All levels, least severe first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    /// Parse `s`, substituting [`LogLevel::FALLBACK`] for anything unrecognized.
    pub fn parse_or_fallback(s: &str) -> LogLevel {
        s.parse().unwrap_or(Self::FALLBACK)
    }
}

/// Names are matched exactly and in lowercase; `critical` is accepted
/// as another name for `panic`.
impl FromStr for LogLevel {
    type Err = ScurvyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "panic" | "critical" => Ok(LogLevel::Panic),
            _ => Err(ScurvyError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
