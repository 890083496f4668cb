//! `log` crate integration
//!
//! Installs the process-wide logger as the backend for the `log` facade so
//! `log::info!` and friends from dependencies end up in the same destination
//! with the same prefixes.

use log::{LevelFilter, Log, Metadata, Record};

use crate::{logger, LogLevel, Result};

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        logger().enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        logger().logf(LogLevel::from(record.level()), *record.args());
    }

    fn flush(&self) {
        logger().flush();
    }
}

/// Route the `log` facade into the process-wide logger.
///
/// Filtering is left to the logger's threshold, so `log::max_level` is opened
/// all the way up. Fails if some other backend was installed first.
pub fn init() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
