//! Leveled logging for gamecode tools.
//!
//! Three severities (`DEBUG < INFO < ERROR`), a process-wide threshold picked
//! from the `DEBUG`/`ERROR` environment markers, and one-line output of the form
//! `[INFO]  2024/01/31 12:00:00 message` on standard error.
//!
//! ```no_run
//! use gamecode_log::{errorf, info, LogLevel};
//!
//! info("starting");
//! errorf!("boom {}", 42);
//! gamecode_log::set_level(LogLevel::Debug);
//! ```

use std::error::Error as StdError;
use std::fmt;

pub mod formatter;
pub mod level;
pub mod logger;
pub mod logging;
pub mod sink;

// Re-export key types
pub use formatter::{Formatter, Timestamp};
pub use level::LogLevel;
pub use logger::{
    debug, debugf, debugln, enabled, error, errorf, errorln, info, infof, infoln, level, logf,
    logger, reset, set_level, set_output, Logger,
};
pub use sink::SharedBuffer;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// String is not a level name
    InvalidLevel(String),
    /// Another `log` backend is already installed
    SetLogger(log::SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLevel(name) => write!(f, "Invalid log level: {:?}", name),
            Error::SetLogger(err) => write!(f, "Logger setup error: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidLevel(_) => None,
            Error::SetLogger(err) => Some(err),
        }
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::SetLogger(err)
    }
}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;

/// Log a format string at an explicit level through the process-wide logger.
///
/// ```no_run
/// gamecode_log::logf!(gamecode_log::LogLevel::Info, "{} files", 3);
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $($arg:tt)+) => {
        $crate::logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a format string at `DEBUG`
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a format string at `INFO`
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a format string at `ERROR`
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Error, $($arg)+)
    };
}
