//! Severity levels and the level gate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity of a record.
///
/// Discriminants are fixed so that `Debug` is the most verbose level and
/// `Fatal` the most severe; comparisons follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum LogLevel {
    Debug = -1,
    #[default]
    Info = 0,
    Warn = 1,
    Error = 2,
    DPanic = 3,
    Panic = 4,
    Fatal = 5,
}

impl LogLevel {
    /// Every level, lowest first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::DPanic,
        LogLevel::Panic,
        LogLevel::Fatal,
    ];

    /// Lowercase text used in the `level` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::DPanic => "dpanic",
            LogLevel::Panic => "panic",
            LogLevel::Fatal => "fatal",
        }
    }

    pub fn as_upper_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::DPanic => "DPANIC",
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Resolve a level name leniently.
    ///
    /// Matching is case-insensitive over `debug`, `info`, `warn`, `error`,
    /// `panic` and `fatal`. Any other input yields [`LogLevel::Info`]; this
    /// never fails.
    ///
    /// ```
    /// use rust_service_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::resolve("ERROR"), LogLevel::Error);
    /// assert_eq!(LogLevel::resolve("bogus"), LogLevel::Info);
    /// ```
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Whether a record at `self` passes a gate set to `minimum`.
    #[inline]
    pub fn is_enabled_for(self, minimum: LogLevel) -> bool {
        should_emit(self, minimum)
    }
}

/// True iff `record` is at or above `minimum`.
#[inline]
pub fn should_emit(record: LogLevel, minimum: LogLevel) -> bool {
    record >= minimum
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse over the level lookup table.
///
/// `dpanic` is deliberately absent from the table; callers that need the
/// lenient behaviour should use [`LogLevel::resolve`].
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "panic" => Ok(LogLevel::Panic),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
