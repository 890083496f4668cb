//! The leveled logger and its process-wide instance.
//!
//! The threshold lives in an atomic and is checked before anything is
//! rendered. The destination and the three formatters share one mutex, so
//! replacing the destination swaps all of them at once and each line goes out
//! in a single write.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::formatter::{render, Formatter, Timestamp};
use crate::LogLevel;

struct Output {
    sink: Box<dyn Write + Send>,
    formatters: [Formatter; 3],
}

impl Output {
    fn new(sink: Box<dyn Write + Send>, timestamp: Timestamp) -> Self {
        Self {
            sink,
            formatters: LogLevel::ALL.map(|level| Formatter::new(level, timestamp)),
        }
    }
}

/// Leveled logger writing to a single destination
pub struct Logger {
    threshold: AtomicU8,
    output: Mutex<Output>,
}

impl Logger {
    /// Logger at `level` writing to standard error
    pub fn new(level: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(level.to_u8()),
            output: Mutex::new(Output::new(Box::new(io::stderr()), Timestamp::Local)),
        }
    }

    /// Logger whose threshold comes from the `DEBUG`/`ERROR` environment markers
    pub fn from_env() -> Self {
        Self::new(LogLevel::from_env())
    }

    /// Use `timestamp` for every level's formatter
    pub fn with_timestamp(self, timestamp: Timestamp) -> Self {
        {
            let mut out = self.lock();
            out.formatters = LogLevel::ALL.map(|level| Formatter::new(level, timestamp));
        }
        self
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Replace the threshold
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.to_u8(), Ordering::Relaxed);
    }

    /// Whether a message at `level` passes the threshold
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Replace the destination of all three levels
    pub fn set_output<W>(&self, out: W)
    where
        W: Write + Send + 'static,
    {
        let mut guard = self.lock();
        let timestamp = guard.formatters[0].timestamp();
        *guard = Output::new(Box::new(out), timestamp);
    }

    /// Write one line at `level` if it passes the threshold.
    ///
    /// Failures from the destination are dropped; logging never errors.
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        // Rendering runs caller Display impls, which may log themselves.
        let message = render(args);

        let mut guard = self.lock();
        let Output { sink, formatters } = &mut *guard;
        let formatter = &formatters[level.to_u8() as usize];
        let _ = formatter.write(sink.as_mut(), &message);
    }

    /// Log one value at `DEBUG`
    pub fn debug<T: Display>(&self, value: T) {
        self.logf(LogLevel::Debug, format_args!("{}", value));
    }

    /// Log preformatted arguments at `DEBUG`; see [`debugf!`](crate::debugf!)
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    /// Log one value followed by a newline at `DEBUG`
    pub fn debugln<T: Display>(&self, value: T) {
        self.logf(LogLevel::Debug, format_args!("{}\n", value));
    }

    /// Log one value at `INFO`
    pub fn info<T: Display>(&self, value: T) {
        self.logf(LogLevel::Info, format_args!("{}", value));
    }

    /// Log preformatted arguments at `INFO`; see [`infof!`](crate::infof!)
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    /// Log one value followed by a newline at `INFO`
    pub fn infoln<T: Display>(&self, value: T) {
        self.logf(LogLevel::Info, format_args!("{}\n", value));
    }

    /// Log one value at `ERROR`
    pub fn error<T: Display>(&self, value: T) {
        self.logf(LogLevel::Error, format_args!("{}", value));
    }

    /// Log preformatted arguments at `ERROR`; see [`errorf!`](crate::errorf!)
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    /// Log one value followed by a newline at `ERROR`
    pub fn errorln<T: Display>(&self, value: T) {
        self.logf(LogLevel::Error, format_args!("{}\n", value));
    }

    /// Flush the destination, ignoring errors
    pub fn flush(&self) {
        let _ = self.lock().sink.flush();
    }

    // A panic inside a sink must not disable logging for the rest of the process.
    fn lock(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level()).finish_non_exhaustive()
    }
}

static LOGGER: LazyLock<Logger> = LazyLock::new(Logger::from_env);

/// The process-wide logger used by the free functions and macros
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Current process-wide threshold
pub fn level() -> LogLevel {
    LOGGER.level()
}

/// Replace the process-wide threshold
pub fn set_level(level: LogLevel) {
    LOGGER.set_level(level);
}

/// Whether the process-wide logger would write a message at `level`
pub fn enabled(level: LogLevel) -> bool {
    LOGGER.enabled(level)
}

/// Redirect every level of the process-wide logger to `out`
pub fn set_output<W>(out: W)
where
    W: Write + Send + 'static,
{
    LOGGER.set_output(out);
}

/// Re-read the threshold from the environment and go back to standard error
pub fn reset() {
    LOGGER.set_level(LogLevel::from_env());
    LOGGER.set_output(io::stderr());
}

/// Log preformatted arguments at `level`; see the [`logf!`](crate::logf!) macro
pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) {
    LOGGER.logf(level, args);
}

/// Log one value at `DEBUG`
pub fn debug<T: Display>(value: T) {
    LOGGER.debug(value);
}

/// Log preformatted arguments at `DEBUG`; see [`debugf!`](crate::debugf!)
pub fn debugf(args: fmt::Arguments<'_>) {
    LOGGER.debugf(args);
}

/// Log one value followed by a newline at `DEBUG`
pub fn debugln<T: Display>(value: T) {
    LOGGER.debugln(value);
}

/// Log one value at `INFO`
pub fn info<T: Display>(value: T) {
    LOGGER.info(value);
}

/// Log preformatted arguments at `INFO`; see [`infof!`](crate::infof!)
pub fn infof(args: fmt::Arguments<'_>) {
    LOGGER.infof(args);
}

/// Log one value followed by a newline at `INFO`
pub fn infoln<T: Display>(value: T) {
    LOGGER.infoln(value);
}

/// Log one value at `ERROR`
pub fn error<T: Display>(value: T) {
    LOGGER.error(value);
}

/// Log preformatted arguments at `ERROR`; see [`errorf!`](crate::errorf!)
pub fn errorf(args: fmt::Arguments<'_>) {
    LOGGER.errorf(args);
}

/// Log one value followed by a newline at `ERROR`
pub fn errorln<T: Display>(value: T) {
    LOGGER.errorln(value);
}
