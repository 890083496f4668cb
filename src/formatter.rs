//! Per-level line rendering.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use chrono::{Local, Utc};

use crate::LogLevel;

/// `YYYY/MM/DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Clock used for the timestamp of each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// Local process clock
    #[default]
    Local,
    /// UTC
    Utc,
}

impl Timestamp {
    fn now(self) -> String {
        match self {
            Timestamp::Local => Local::now().format(TIMESTAMP_FORMAT).to_string(),
            Timestamp::Utc => Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Renders lines for one level: prefix, timestamp, message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    prefix: &'static str,
    timestamp: Timestamp,
}

/// Render caller arguments into a message.
///
/// Writing into a String only fails if a Display impl reports an error;
/// whatever was rendered up to that point is kept.
pub fn render(args: fmt::Arguments<'_>) -> String {
    let mut message = String::new();
    let _ = message.write_fmt(args);
    message
}

impl Formatter {
    /// Formatter for `level` stamping lines with `timestamp`
    pub fn new(level: LogLevel, timestamp: Timestamp) -> Self {
        Self {
            prefix: level.prefix(),
            timestamp,
        }
    }

    /// Level prefix, e.g. `"[INFO]  "`
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Clock used for each line
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Build one newline-terminated line around an already rendered message.
    /// A newline already ending the message is not doubled.
    pub fn format(&self, message: &str) -> String {
        self.format_at(&self.timestamp.now(), message)
    }

    fn format_at(&self, stamp: &str, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + stamp.len() + message.len() + 2);
        line.push_str(self.prefix);
        line.push_str(stamp);
        line.push(' ');
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Write one line with a single `write_all`.
    pub fn write(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        out.write_all(self.format(message).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_format_shape() {
        let f = Formatter::new(LogLevel::Error, Timestamp::Local);
        assert_eq!(f.prefix(), "[ERROR] ");
        let line = f.format(&render(format_args!("boom {}", 42)));

        let re = Regex::new(r"^\[ERROR\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} boom 42\n$").unwrap();
        assert!(re.is_match(&line), "unexpected line: {:?}", line);
    }

    #[test]
    fn test_format_at_fixed_stamp() {
        let f = Formatter::new(LogLevel::Info, Timestamp::Utc);
        let line = f.format_at("2009/11/10 23:00:00", "hello");
        assert_eq!(line, "[INFO]  2009/11/10 23:00:00 hello\n");
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let f = Formatter::new(LogLevel::Debug, Timestamp::Utc);
        let line = f.format_at("2009/11/10 23:00:00", &render(format_args!("{}\n", "x")));
        assert_eq!(line, "[DEBUG] 2009/11/10 23:00:00 x\n");
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_write_single_line() {
        let f = Formatter::new(LogLevel::Info, Timestamp::Local);
        let mut out = Vec::new();
        f.write(&mut out, "to buffer").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[INFO]  "));
        assert!(text.ends_with("to buffer\n"));
        assert_eq!(text.lines().count(), 1);
    }

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_keeps_partial_output() {
        assert_eq!(render(format_args!("before {} after", Broken)), "before ");
    }
}
