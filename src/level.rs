//! Severity levels and environment-based level selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Environment marker that selects [`LogLevel::Debug`] at startup
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment marker that selects [`LogLevel::Error`] at startup
pub const ERROR_ENV: &str = "ERROR";

/// Severity of a log message, ordered `Debug < Info < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Diagnostic detail, hidden by default
    Debug,
    /// Normal operational messages
    #[default]
    Info,
    /// Failures
    Error,
}

impl LogLevel {
    /// All levels, least severe first
    pub const ALL: [LogLevel; 3] = [LogLevel::Debug, LogLevel::Info, LogLevel::Error];

    /// Line prefix for this level. `INFO` is padded so messages line up.
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }

    /// Upper-case level name
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }

    /// Select the initial level from the process environment.
    ///
    /// Only the presence of `DEBUG` or `ERROR` matters, not their values.
    /// `DEBUG` wins when both are set; with neither the level is `Info`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).is_some())
    }

    /// Same selection as [`LogLevel::from_env`], with the presence check supplied
    /// by the caller.
    pub fn from_lookup<F>(is_set: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if is_set(DEBUG_ENV) {
            LogLevel::Debug
        } else if is_set(ERROR_ENV) {
            LogLevel::Error
        } else {
            LogLevel::Info
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            _ => LogLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidLevel(s.to_string()))
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => LogLevel::Debug,
            log::Level::Info | log::Level::Warn => LogLevel::Info,
            log::Level::Error => LogLevel::Error,
        }
    }
}
